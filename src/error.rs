//! Error taxonomy shared by the server handlers and the play-through client.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz sets available")]
    NoData,
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// The quiz source could not be read or did not hold valid quiz sets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataLoadError {
    #[error("could not read quiz file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed quiz data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("question {index} of set '{set}' is invalid: {reason}")]
    InvalidQuestion {
        set: String,
        index: usize,
        reason: String,
    },
    #[error("quiz request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("quiz request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode quiz response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The result store was unreachable or rejected the write.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    #[error(transparent)]
    Store(#[from] sqlx::Error),
    #[error("could not encode result record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("result request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("result request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode result response: {0}")]
    Decode(#[source] reqwest::Error),
}
