use clap::Parser;
use support::CommonArgs;

#[derive(Parser, Debug)]
pub struct ServerArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
