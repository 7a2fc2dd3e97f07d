use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    /// Arguments must come in `-flag value` pairs.
    #[error("Error with the arguments")]
    OddArgumentCount(usize),

    #[error("Invalid key: {0:?} is not an integer")]
    InvalidKey(String),

    #[error("Invalid code point: {0} is outside the Unicode scalar range")]
    InvalidCodePoint(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
