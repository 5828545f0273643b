//! Device discovery poller
//!
//! Repeats ListDevices until the service reports at least one device,
//! waiting a fixed backoff between attempts. There is no attempt cap;
//! the only way out is a successful, non-empty listing.

use crate::service::SniService;
use sni_watch_core::{Device, WatchConfig, WatchError};
use tokio::time::sleep;
use tracing::{error, info};

/// Block until the service reports a device, then return the first
/// entry of the listing as returned (no sorting). Selection is not
/// re-evaluated once a device is chosen.
pub async fn discover(service: &dyn SniService, config: &WatchConfig) -> Device {
    loop {
        info!("Waiting for device");
        match service.list_devices(config.list_deadline).await {
            Ok(devices) => {
                if let Some(device) = devices.into_iter().next() {
                    info!(
                        "Connecting to device {} ({})",
                        device.display_name, device.uri
                    );
                    return device;
                }
                error!("{}", WatchError::NoDevices);
            }
            Err(e) => error!("ListDevices failed: {}", e),
        }
        sleep(config.discovery_backoff).await;
    }
}
