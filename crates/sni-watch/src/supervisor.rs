//! Connection supervisor
//!
//! Owns the whole discover → session sequence in one explicit loop.
//! A session ending, whether by poll failure or by the directory
//! strategy completing, leads straight back into discovery with a
//! fresh ListDevices call; the previous device is never reused.
//! Backoff lives entirely in discovery.

use crate::service::SniService;
use crate::{discovery, session};
use sni_watch_core::WatchConfig;
use tracing::{info, warn};

/// Drive discovery and sessions until the process is terminated.
///
/// At most one session runs at a time; this function never returns.
pub async fn run(service: &dyn SniService, config: &WatchConfig) {
    loop {
        let device = discovery::discover(service, config).await;
        match session::run_session(service, &device, config).await {
            Ok(()) => info!("Session finished, rediscovering"),
            Err(e) => warn!("Session ended ({}), rediscovering", e),
        }
    }
}
