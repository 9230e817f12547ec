//! Case transformation for quote text.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How quote text is cased before it is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    #[default]
    Uppercase,
    Lowercase,
    Titlecase,
    None,
}

impl TextCase {
    /// Apply this case mode to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Uppercase => text.to_uppercase(),
            TextCase::Lowercase => text.to_lowercase(),
            TextCase::Titlecase => title_case(text),
            TextCase::None => text.to_string(),
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextCase::Uppercase => "uppercase",
            TextCase::Lowercase => "lowercase",
            TextCase::Titlecase => "titlecase",
            TextCase::None => "none",
        };
        f.write_str(name)
    }
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts at any letter whose predecessor is not a letter, so
/// apostrophes and hyphens both split words.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if !c.is_alphabetic() {
            out.push(c);
            in_word = false;
            continue;
        }

        if in_word {
            out.extend(c.to_lowercase());
        } else {
            // Multi-char uppercase expansions (ß -> SS) keep only the
            // leading char capitalised.
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
        in_word = true;
    }

    out
}
