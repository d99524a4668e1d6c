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

    #[error("failed to bind UDP socket on port {port}: {source}")]
    Bind { port: u16, source: io::Error },
}

/// Session-scoped errors. The server never terminates on one of these — it
/// logs and moves on to the next datagram, per §7's propagation policy.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("failed to decode message: {0}")]
    Decode(#[from] CodecError),

    #[error("generation exhausted after {0} consecutive collisions")]
    GenerationExhausted(u32),

    #[error("unexpected message for current session state")]
    UnexpectedMessage,
}
