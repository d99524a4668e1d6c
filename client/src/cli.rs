use std::path::PathBuf;

use clap::Parser;
use support::CommonArgs;

#[derive(Parser, Debug)]
pub struct ClientArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long = "numbers-path")]
    pub numbers_path: PathBuf,
}
