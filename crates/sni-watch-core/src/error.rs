//! Error types for the watcher

use thiserror::Error;

/// Result type for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;

/// Watcher error types
///
/// None of these are fatal to the process: discovery retries forever,
/// and a failed poll ends the session so the supervisor can restart
/// discovery.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Service unreachable or the call failed in transit
    #[error("transport error: {0}")]
    Transport(String),

    /// Per-call deadline expired before a reply arrived
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// ListDevices succeeded but reported no devices
    #[error("no devices reported by the service")]
    NoDevices,

    /// A memory read reply carried no data
    #[error("memory read returned an empty reply")]
    EmptyRead,
}
