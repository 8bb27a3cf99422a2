use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

use crate::model::Report;

pub type Result<T> = std::result::Result<T, ThorError>;

#[derive(Debug, Error)]
pub enum ThorError {
    /// Bad or missing command-line arguments.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The GET itself failed: DNS, connect, TLS, reset, body read.
    /// Non-2xx statuses never end up here.
    #[error("worker {worker} request {index} failed: {source}")]
    Network {
        worker: u32,
        index: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("writing report failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report channel closed")]
    Report(#[from] SendError<Report>),
}

impl ThorError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ThorError::Usage(e) if !e.use_stderr() => 0,
            _ => 1,
        }
    }
}
