use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("input index {index} out of range for {len} selected images")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("unknown view settings field `{0}`")]
    UnknownViewField(String),

    #[error("unknown pipeline settings field `{0}`")]
    UnknownSettingsField(String),
}
