//! Session loop
//!
//! One attached device, one poll strategy. Any failed call is fatal
//! to the session: the loop returns and the supervisor starts
//! discovery over. There is no retry within a session.

use crate::service::SniService;
use sni_watch_core::{
    Device, GameState, MonitoringResult, PollStrategy, Result, WatchConfig, WatchError,
};
use tokio::time::sleep;
use tracing::{error, info};

/// Run one session against `device`.
///
/// The memory strategy polls until a call fails and never returns
/// `Ok`. The directory strategy issues a single read and returns
/// `Ok(())` once it is logged. Either way the device URI captured at
/// session start is used unchanged until the session ends.
pub async fn run_session(
    service: &dyn SniService,
    device: &Device,
    config: &WatchConfig,
) -> Result<()> {
    match config.strategy {
        PollStrategy::Memory => poll_memory(service, device, config).await,
        PollStrategy::Directory => read_root_directory(service, device, config).await,
    }
}

async fn poll_memory(
    service: &dyn SniService,
    device: &Device,
    config: &WatchConfig,
) -> Result<()> {
    loop {
        info!("Sending read request to {}", device.display_name);
        let data = match service
            .read_memory(&device.uri, &config.read, config.call_deadline)
            .await
        {
            Ok(data) => data,
            Err(e) => {
                error!("SingleRead failed: {}", e);
                return Err(e);
            }
        };

        let Some(&byte) = data.first() else {
            let e = WatchError::EmptyRead;
            error!("SingleRead failed: {}", e);
            return Err(e);
        };

        log_result(&MonitoringResult::StateByte(byte));
        sleep(config.poll_interval).await;
    }
}

async fn read_root_directory(
    service: &dyn SniService,
    device: &Device,
    config: &WatchConfig,
) -> Result<()> {
    info!("Reading directory / on {}", device.display_name);
    match service
        .read_directory(&device.uri, "/", config.call_deadline)
        .await
    {
        Ok(names) => {
            log_result(&MonitoringResult::DirectoryListing(names));
            Ok(())
        }
        Err(e) => {
            error!("ReadDirectory failed: {}", e);
            Err(e)
        }
    }
}

fn log_result(result: &MonitoringResult) {
    match result {
        MonitoringResult::StateByte(byte) => match GameState::from_byte(*byte) {
            Some(state) => info!("Game state: {}", state),
            None => info!("Game state: unrecognized byte 0x{:02X}", byte),
        },
        MonitoringResult::DirectoryListing(names) => {
            info!("Directory listing: {}", names.join(", "));
        }
    }
}
