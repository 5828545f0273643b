//! Watcher configuration
//!
//! All timings default to the reference behavior: 3 second call
//! deadlines, 5 second discovery backoff, 3 second poll interval.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Which monitoring request a session issues.
///
/// Exactly one strategy is active for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStrategy {
    /// Read one WRAM byte per poll interval, forever
    Memory,
    /// Read the device filesystem root once, then end the session
    Directory,
}

impl FromStr for PollStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(PollStrategy::Memory),
            "directory" => Ok(PollStrategy::Directory),
            other => Err(format!(
                "unknown poll strategy {:?} (expected \"memory\" or \"directory\")",
                other
            )),
        }
    }
}

/// How a requested address is interpreted on the target device.
/// Opaque to the watcher beyond being passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressSpace {
    FxPakPro,
    SnesABus,
    Raw,
}

/// Cartridge memory mapping used to translate the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryMapping {
    Unknown,
    HiRom,
    LoRom,
    ExHiRom,
}

/// Fixed shape of the per-poll memory read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReadSpec {
    pub address: u32,
    pub space: AddressSpace,
    pub mapping: MemoryMapping,
    pub size: u32,
}

impl Default for MemoryReadSpec {
    fn default() -> Self {
        // A Link to the Past main-module byte, FX Pak Pro address space
        Self {
            address: 0xF5_0010,
            space: AddressSpace::FxPakPro,
            mapping: MemoryMapping::ExHiRom,
            size: 1,
        }
    }
}

/// Configuration for the watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Active poll strategy
    pub strategy: PollStrategy,
    /// Deadline for each ListDevices call
    pub list_deadline: Duration,
    /// Deadline for each poll call
    pub call_deadline: Duration,
    /// Wait between unsuccessful discovery attempts
    pub discovery_backoff: Duration,
    /// Wait between successful memory polls
    pub poll_interval: Duration,
    /// Request shape for the memory strategy
    pub read: MemoryReadSpec,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            strategy: PollStrategy::Memory,
            list_deadline: Duration::from_secs(3),
            call_deadline: Duration::from_secs(3),
            discovery_backoff: Duration::from_secs(5),
            poll_interval: Duration::from_secs(3),
            read: MemoryReadSpec::default(),
        }
    }
}
