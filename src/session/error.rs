use thiserror::Error;

use crate::dispatch::DispatchError;
use crate::job::ValidationError;
use crate::model::StoreError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("job validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("pipeline dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("settings I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings YAML failure: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
