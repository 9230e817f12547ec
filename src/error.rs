use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for quotewall operations
#[derive(Error, Diagnostic, Debug)]
pub enum QuotewallError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(quotewall::io))]
    Io { path: PathBuf, message: String },

    #[error("Input file '{path}' not found")]
    #[diagnostic(
        code(quotewall::input::missing),
        help("Create a text file with one quote per line, e.g. echo 'Hello World' > texts.txt")
    )]
    InputMissing { path: PathBuf },

    #[error("No text found in '{path}'")]
    #[diagnostic(
        code(quotewall::input::empty),
        help("Every line is blank; add at least one quote")
    )]
    EmptyInput { path: PathBuf },

    #[error("Could not load a font: {message}")]
    #[diagnostic(code(quotewall::font))]
    Font {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(quotewall::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(quotewall::render))]
    Render { message: String },

    #[error("{failed} of {total} wallpapers failed to generate")]
    #[diagnostic(
        code(quotewall::incomplete),
        help("See the warnings above for the reason each image failed")
    )]
    Incomplete { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, QuotewallError>;
