//! Text preparation: case transformation and line wrapping.

mod case;
mod wrap;

pub use case::TextCase;
pub use wrap::wrap;
