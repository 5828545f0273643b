//! # sni-watch-core
//!
//! Transport-free core types for the SNI game-state watcher:
//! - Discovered device identity
//! - Per-poll monitoring results
//! - Game-state byte lookup
//! - Watcher configuration and memory-read parameters
//! - Error types

pub mod config;
pub mod device;
pub mod error;
pub mod game_state;

pub use config::{AddressSpace, MemoryMapping, MemoryReadSpec, PollStrategy, WatchConfig};
pub use device::{Device, MonitoringResult};
pub use error::{Result, WatchError};
pub use game_state::GameState;
