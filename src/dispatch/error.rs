use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("a generation job is already in flight")]
    JobInFlight,

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} stage failed: {detail}")]
    Stage {
        stage: &'static str,
        detail: String,
    },

    #[error("pipeline I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
