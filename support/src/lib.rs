//! Ambient collaborators shared by both binaries: CLI flag parsing, JSON
//! config loading, and the timestamped logger. None of this is part of the
//! core reliability protocol — it is the plumbing every complete build of it
//! needs around it.

pub mod cli;
pub mod config;
pub mod logger;

pub use cli::CommonArgs;
pub use config::{load_json, ConfigError};
pub use logger::Logger;
