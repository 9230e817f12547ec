//! Run configuration.
//!
//! A [`Config`] is built once per run from three layers: built-in
//! defaults, an optional `quotewall.yaml` settings file, and command-line
//! flags. Each layer is a [`Settings`] value whose `Some` fields override
//! the layer below. After [`Config::validate`] the value is read-only and
//! passed by reference to every stage of the pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuotewallError, Result};
use crate::render::default_font_candidates;
use crate::text::TextCase;

/// Settings file looked up in the working directory when `--config` is absent.
pub const SETTINGS_FILENAME: &str = "quotewall.yaml";

/// Largest canvas side the JPEG encoder accepts.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// One layer of optional configuration values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    /// A single font file; when set, no other candidates are tried.
    pub font: Option<PathBuf>,
    /// Replacement for the built-in font search list.
    pub fonts: Option<Vec<PathBuf>>,
    pub font_size: Option<u32>,
    pub text_width: Option<usize>,
    pub line_spacing: Option<u32>,
    pub text_case: Option<TextCase>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QuotewallError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string. An empty document yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| QuotewallError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Find the settings layer for this run.
    ///
    /// An explicit path must exist. Otherwise `quotewall.yaml` in `dir` is
    /// used when present, and an empty layer when not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(SETTINGS_FILENAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "using settings file");
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Background colour token, resolved by the renderer.
    pub background: String,
    /// Text colour token, resolved by the renderer.
    pub foreground: String,
    /// Explicit font file, if any.
    pub font: Option<PathBuf>,
    /// Fallback search list used when `font` is `None`.
    pub font_candidates: Vec<PathBuf>,
    /// Font size in pixels.
    pub font_size: u32,
    /// Maximum characters per wrapped line.
    pub text_width: usize,
    /// Pixels between wrapped lines.
    pub line_spacing: u32,
    pub text_case: TextCase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("texts.txt"),
            output: PathBuf::from("output"),
            width: 1920,
            height: 1080,
            background: "black".to_string(),
            foreground: "white".to_string(),
            font: None,
            font_candidates: default_font_candidates(),
            font_size: 30,
            text_width: 30,
            line_spacing: 15,
            text_case: TextCase::Uppercase,
        }
    }
}

impl Config {
    /// Apply a settings layer on top of this configuration.
    pub fn merge(mut self, layer: &Settings) -> Self {
        let layer = layer.clone();

        if let Some(v) = layer.input {
            self.input = v;
        }
        if let Some(v) = layer.output {
            self.output = v;
        }
        if let Some(v) = layer.width {
            self.width = v;
        }
        if let Some(v) = layer.height {
            self.height = v;
        }
        if let Some(v) = layer.background {
            self.background = v;
        }
        if let Some(v) = layer.foreground {
            self.foreground = v;
        }
        if let Some(v) = layer.font {
            self.font = Some(v);
        }
        if let Some(v) = layer.fonts {
            self.font_candidates = v;
        }
        if let Some(v) = layer.font_size {
            self.font_size = v;
        }
        if let Some(v) = layer.text_width {
            self.text_width = v;
        }
        if let Some(v) = layer.line_spacing {
            self.line_spacing = v;
        }
        if let Some(v) = layer.text_case {
            self.text_case = v;
        }

        self
    }

    /// Check the invariants every later stage relies on.
    pub fn validate(self) -> Result<Self> {
        let positive = [
            ("width", self.width as usize),
            ("height", self.height as usize),
            ("font-size", self.font_size as usize),
            ("text-width", self.text_width),
        ];

        for (name, value) in positive {
            if value == 0 {
                return Err(QuotewallError::Config {
                    message: format!("{} must be a positive integer", name),
                    help: None,
                });
            }
        }

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_DIMENSION {
                return Err(QuotewallError::Config {
                    message: format!("{} must be at most {} pixels", name, MAX_DIMENSION),
                    help: Some("JPEG images are limited to 65535 pixels per side".to_string()),
                });
            }
        }

        Ok(self)
    }
}
