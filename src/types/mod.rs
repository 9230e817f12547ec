//! Core domain types for quotewall.

mod colour;

pub use colour::{parse_color, Colour};
