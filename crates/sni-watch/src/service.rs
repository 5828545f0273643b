//! Remote service facade
//!
//! The watcher depends only on this trait; the tonic-backed
//! implementation lives in [`crate::grpc`] and tests drive the
//! watcher with a scripted implementation instead.

use async_trait::async_trait;
use sni_watch_core::{Device, MemoryReadSpec, Result};
use std::time::Duration;

/// Deadline-bounded calls against the SNI automation service.
///
/// Each call may fail or time out independently. The caller decides
/// what a failure means: discovery retries, a session tears down.
#[async_trait]
pub trait SniService: Send + Sync {
    /// Enumerate currently attached devices.
    async fn list_devices(&self, deadline: Duration) -> Result<Vec<Device>>;

    /// Read `spec.size` bytes at `spec.address` on the device at `uri`.
    async fn read_memory(
        &self,
        uri: &str,
        spec: &MemoryReadSpec,
        deadline: Duration,
    ) -> Result<Vec<u8>>;

    /// List entry names under `path` on the device filesystem at `uri`.
    async fn read_directory(
        &self,
        uri: &str,
        path: &str,
        deadline: Duration,
    ) -> Result<Vec<String>>;
}
