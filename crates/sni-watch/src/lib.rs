//! # sni-watch
//!
//! Long-running watcher for SNES devices exposed by an SNI automation
//! service. The watcher discovers a single device, attaches to it,
//! polls it for game state (or a directory listing) on a fixed
//! interval, and restarts discovery whenever a poll fails.
//!
//! The pieces, leaf-first:
//! - [`service::SniService`]: the remote call contracts the watcher
//!   depends on
//! - [`grpc::GrpcSniService`]: the tonic-backed implementation
//! - [`discovery`]: retry ListDevices until a device appears
//! - [`session`]: poll one attached device until failure
//! - [`supervisor`]: the process-lifetime discover → session loop

pub mod discovery;
pub mod grpc;
pub mod service;
pub mod session;
pub mod supervisor;

#[cfg(test)]
pub(crate) mod testutil;

pub use grpc::GrpcSniService;
pub use service::SniService;
