//! Rendering module for quotewall.
//!
//! Turns a quote into a centered caption on a solid canvas and writes it
//! out as a JPEG.

mod font;
mod jpeg;
mod layout;
mod wallpaper;

pub use font::{default_font_candidates, FontLoader, LoadedFont, Typeface};
pub use jpeg::{write_jpeg, JPEG_QUALITY};
pub use layout::{layout, Extent, Origin, PlacedLine, WrappedBlock};
pub use wallpaper::Renderer;
