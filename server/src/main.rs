use std::sync::Arc;

use clap::Parser;
use support::load_json;
use tokio::net::UdpSocket;

use server::cli::ServerArgs;
use server::config::ServerConfig;
use server::error::StartupError;

fn main() -> Result<(), StartupError> {
    let args = ServerArgs::parse();
    let config: ServerConfig = load_json(&args.common.config_path)?;
    let logger = Arc::new(support::Logger::new(&args.common.logs_path)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    runtime.block_on(async move {
        let socket = UdpSocket::bind(("0.0.0.0", config.port))
            .await
            .map_err(|source| StartupError::Bind { port: config.port, source })?;

        logger.log(format!("listening on port {}", config.port));

        tokio::select! {
            result = server::serve(socket, Arc::clone(&logger)) => {
                if let Err(error) = result {
                    logger.log(format!("receive loop terminated: {error}"));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                logger.log("shutdown signal received, stopping".to_string());
            }
        }

        Ok(())
    })
}
