use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid tag {0:?}: expected KEY=VALUE")]
    InvalidTag(String),

    #[error("invalid tag {0:?}: key must not be empty")]
    EmptyTagKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
