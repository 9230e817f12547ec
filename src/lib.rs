//! quotewall - Quote wallpaper generator
//!
//! A library for rendering lines of text as centered captions on solid
//! colour backgrounds, one JPEG per line.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod text;
pub mod types;

pub use config::{Config, Settings, SETTINGS_FILENAME};
pub use error::{QuotewallError, Result};
pub use render::{
    layout, write_jpeg, Extent, FontLoader, LoadedFont, Origin, PlacedLine, Renderer, Typeface,
    WrappedBlock,
};
pub use text::{wrap, TextCase};
pub use types::{parse_color, Colour};
