use thiserror::Error;

#[derive(Debug, Error)]
pub enum SharedError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<serde_json::Error> for SharedError {
    fn from(error: serde_json::Error) -> Self {
        SharedError::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
