//! Error type shared by the calendar core and the PDF renderer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalError {
    /// Bad year, month, page size or missing arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render PDF: {0}")]
    Render(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalError>;
