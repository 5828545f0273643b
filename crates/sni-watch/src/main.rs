//! SNI game-state watcher binary
//!
//! Connects to an SNI endpoint and runs the discover → poll → recover
//! loop until externally terminated.

use anyhow::Result;
use sni_watch::{GrpcSniService, supervisor};
use sni_watch_core::WatchConfig;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let addr = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:8191");

    let mut config = WatchConfig::default();
    if let Some(strategy) = args.get(2) {
        config.strategy = strategy
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
    }

    info!("sni-watch starting");
    info!("SNI endpoint: {}", addr);
    info!("Poll strategy: {:?}", config.strategy);

    let service = GrpcSniService::connect_lazy(addr)
        .map_err(|e| anyhow::anyhow!("Failed to build SNI channel: {}", e))?;

    // Runs until the process is killed.
    supervisor::run(&service, &config).await;

    Ok(())
}
