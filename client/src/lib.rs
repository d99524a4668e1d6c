//! The number-sequence client: requests a bounded set of unique random
//! numbers from the server, ingests them fragment by fragment, merges them
//! into one descending sequence, and persists the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod persist;
pub mod session;
pub mod socket;

use std::path::Path;

use support::Logger;
use tokio::net::UdpSocket;

use crate::config::ClientConfig;
use crate::error::SessionError;
use crate::socket::Transport;

/// Runs one full generation request against `config.host:config.port` and
/// persists the merged descending sequence to `numbers_path`.
pub async fn run(config: &ClientConfig, numbers_path: &Path, logger: &Logger) -> Result<(), SessionError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect((config.host.as_str(), config.port)).await?;
    let transport = Transport::new(socket);

    let numbers = session::run(&transport, config.numbers_count, config.upper_bound, logger).await?;

    logger.log(format!("received {} numbers, persisting to {}", numbers.len(), numbers_path.display()));

    persist::write_sequence(numbers_path, &numbers)
        .await
        .map_err(|source| SessionError::Persist { path: numbers_path.to_path_buf(), source })?;

    Ok(())
}
