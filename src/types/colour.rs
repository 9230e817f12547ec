//! Colour tokens and parsing.
//!
//! Colours arrive from the command line as either a hex code or one of a
//! small set of names. [`parse_color`] normalizes a token to a hex string
//! without judging it; [`Colour::from_hex`] turns that string into RGB and
//! is where an invalid token is finally rejected.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{QuotewallError, Result};

/// Named colours understood by [`parse_color`].
const NAMED_COLOURS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#00FF00"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("darkgray", "#404040"),
    ("lightgray", "#C0C0C0"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("purple", "#800080"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
];

/// Resolve a colour token to a hex string.
///
/// Tokens are trimmed and compared case-insensitively. Hex tokens come back
/// lowercased, known names map to their hex code, and anything else is
/// returned as-is for the renderer to accept or reject.
pub fn parse_color(token: &str) -> String {
    let token = token.trim().to_lowercase();

    if token.starts_with('#') {
        return token;
    }

    NAMED_COLOURS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, hex)| (*hex).to_string())
        .unwrap_or(token)
}

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string (`#RGB` or `#RRGGBB`, hash optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let srgb: Srgb<u8> = s.parse().map_err(|e| QuotewallError::Render {
            message: format!("Invalid colour '{}': {}", s, e),
        })?;

        Ok(Self::rgb(srgb.red, srgb.green, srgb.blue))
    }

    /// Resolve a colour token (name or hex) and parse it.
    pub fn resolve(token: &str) -> Result<Self> {
        Self::from_hex(&parse_color(token))
    }

    /// Convert to an RGB triple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = QuotewallError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named_uppercase_input() {
        assert_eq!(parse_color("RED"), "#FF0000");
        assert_eq!(parse_color("  Navy "), "#000080");
    }

    #[test]
    fn test_parse_color_hex_passthrough() {
        assert_eq!(parse_color("#123abc"), "#123abc");
        assert_eq!(parse_color("#ABCDEF"), "#abcdef");
    }

    #[test]
    fn test_parse_color_grey_spellings() {
        assert_eq!(parse_color("gray"), parse_color("grey"));
        assert_eq!(parse_color("darkgray"), "#404040");
        assert_eq!(parse_color("lightgray"), "#C0C0C0");
    }

    #[test]
    fn test_parse_color_unknown_returned_unchanged() {
        assert_eq!(parse_color("chartreuse"), "chartreuse");
    }

    #[test]
    fn test_from_hex_6digit() {
        assert_eq!(Colour::from_hex("#FF0000").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(
            Colour::from_hex("#1a1a2e").unwrap(),
            Colour::rgb(0x1a, 0x1a, 0x2e)
        );
    }

    #[test]
    fn test_from_hex_3digit() {
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGGGGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("chartreuse").is_err());
    }

    #[test]
    fn test_resolve_named() {
        assert_eq!(Colour::resolve("White").unwrap(), Colour::WHITE);
        assert_eq!("black".parse::<Colour>().unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#FF0000");
    }
}
