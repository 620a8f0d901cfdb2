use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a list of products, found {0}")]
    NotAList(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
