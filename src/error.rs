use thiserror::Error;

/// Errors returned while building a corpus or configuring a segmenter
#[derive(Debug, Error)]
pub enum Error {
    /// The maximum word length was zero
    #[error("maximum word length must be greater than 0")]
    InvalidMaxWordLength,

    /// The corpus total was zero, negative or not finite
    #[error("corpus total must be positive and finite, got {0}")]
    InvalidTotal(f64),

    /// A corpus line could not be parsed
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
