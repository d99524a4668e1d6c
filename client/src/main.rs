use clap::Parser;
use support::{load_json, Logger};

use client::cli::ClientArgs;
use client::config::ClientConfig;
use client::error::StartupError;

fn main() -> Result<(), StartupError> {
    let args = ClientArgs::parse();
    let config: ClientConfig = load_json(&args.common.config_path)?;
    let logger = Logger::new(&args.common.logs_path)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    runtime.block_on(async {
        if let Err(error) = client::run(&config, &args.numbers_path, &logger).await {
            logger.log(format!("run failed: {error}"));
            std::process::exit(1);
        }
    });

    Ok(())
}
