use std::path::PathBuf;

use clap::Args;

/// Flags shared by both binaries. Plays the role the original's
/// `utils::CommandLineOptions` base class plays for its
/// `client::CommandLineOptions`/`server`-side equivalent: each binary's own
/// `clap::Parser` struct flattens this in and adds whatever else it needs.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// JSON configuration file location.
    #[arg(long = "config-path")]
    pub config_path: PathBuf,

    /// Directory the per-run log file is written into.
    #[arg(long = "logs-path")]
    pub logs_path: PathBuf,
}
