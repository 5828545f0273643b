//! Discovered device identity and per-poll results

use serde::{Deserialize, Serialize};

/// A remote target exposed by the automation service.
///
/// The `uri` is the opaque routing key for every call made against the
/// device; `display_name` exists for logs only. A device is immutable
/// once discovered, owned by a single session, and discarded when that
/// session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub uri: String,
    pub display_name: String,
}

impl Device {
    pub fn new(uri: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            display_name: display_name.into(),
        }
    }
}

/// Outcome of one poll. Produced, logged, and discarded each cycle;
/// never accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitoringResult {
    /// Single state byte returned by a memory read
    StateByte(u8),
    /// Entry names returned by a directory read
    DirectoryListing(Vec<String>),
}
