use std::io;
use thiserror::Error;

use protocol::CodecError;
use support::ConfigError;

/// Startup-fatal errors. Any of these propagates out of `main` and sets a
/// non-zero exit code, per §7 of the specification.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create logs directory or log file: {0}")]
    Logging(#[from] io::Error),
}

/// Session-scoped errors. Unlike the server, the client terminates the run
/// on any of these, per §7's propagation policy.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("failed to decode message: {0}")]
    Decode(#[from] CodecError),

    #[error("unexpected message for current session state")]
    UnexpectedMessage,

    #[error("server rejected protocol version: {0}")]
    VersionRejected(String),

    #[error("server rejected upper bound: {0}")]
    SequenceRejected(String),

    #[error("fragment {0} was not acknowledged within the retry budget")]
    RetriesExhausted(u64),

    #[error("failed to persist output to {path}: {source}")]
    Persist { path: std::path::PathBuf, source: io::Error },
}
