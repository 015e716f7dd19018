// Failure taxonomy. Every fallible step maps to one category; the pipeline
// decides fatal-vs-continue per category (only the forward step continues).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("configuration: {0}")]
    Config(String),

    #[error("store: {0}")]
    Store(String),

    #[error("counter source: {0}")]
    Counter(String),

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("network: {0}")]
    Network(#[from] std::io::Error),
}

impl From<sqlx::Error> for ProbeError {
    fn from(e: sqlx::Error) -> Self {
        ProbeError::Store(e.to_string())
    }
}
