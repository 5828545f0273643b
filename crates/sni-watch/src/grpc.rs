//! tonic-backed implementation of the service facade

use crate::service::SniService;
use async_trait::async_trait;
use sni_proto::device_filesystem_client::DeviceFilesystemClient;
use sni_proto::device_memory_client::DeviceMemoryClient;
use sni_proto::devices_client::DevicesClient;
use sni_proto::{
    DevicesRequest, ReadDirectoryRequest, ReadMemoryRequest, SingleReadMemoryRequest,
};
use sni_watch_core::{AddressSpace, Device, MemoryMapping, MemoryReadSpec, Result, WatchError};
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Request, Status};
use tracing::debug;

/// SNI facade over a shared gRPC channel.
///
/// The channel is lazy: construction succeeds while the service is
/// down and each call attempts the connection, so discovery is free
/// to retry against an unreachable endpoint. Per-service clients are
/// cheap wrappers over a cloned channel and are built per call.
#[derive(Clone)]
pub struct GrpcSniService {
    channel: Channel,
}

impl GrpcSniService {
    /// Build a lazily connecting service for `addr`
    /// (e.g. `http://localhost:8191`).
    pub fn connect_lazy(addr: &str) -> Result<Self> {
        let endpoint = Endpoint::from_shared(addr.to_string())
            .map_err(|e| WatchError::Transport(format!("invalid endpoint {}: {}", addr, e)))?;
        Ok(Self {
            channel: endpoint.connect_lazy(),
        })
    }
}

#[async_trait]
impl SniService for GrpcSniService {
    async fn list_devices(&self, deadline: Duration) -> Result<Vec<Device>> {
        let mut client = DevicesClient::new(self.channel.clone());
        let response = client
            .list_devices(with_deadline(DevicesRequest { kinds: vec![] }, deadline))
            .await
            .map_err(map_status)?;

        let devices = response.into_inner().devices;
        debug!("ListDevices returned {} device(s)", devices.len());
        Ok(devices
            .into_iter()
            .map(|d| Device::new(d.uri, d.display_name))
            .collect())
    }

    async fn read_memory(
        &self,
        uri: &str,
        spec: &MemoryReadSpec,
        deadline: Duration,
    ) -> Result<Vec<u8>> {
        let mut client = DeviceMemoryClient::new(self.channel.clone());
        let request = SingleReadMemoryRequest {
            uri: uri.to_string(),
            request: Some(ReadMemoryRequest {
                request_address: spec.address,
                request_address_space: proto_space(spec.space) as i32,
                request_memory_mapping: proto_mapping(spec.mapping) as i32,
                size: spec.size,
            }),
        };

        let response = client
            .single_read(with_deadline(request, deadline))
            .await
            .map_err(map_status)?;

        Ok(response
            .into_inner()
            .response
            .map(|r| r.data)
            .unwrap_or_default())
    }

    async fn read_directory(
        &self,
        uri: &str,
        path: &str,
        deadline: Duration,
    ) -> Result<Vec<String>> {
        let mut client = DeviceFilesystemClient::new(self.channel.clone());
        let request = ReadDirectoryRequest {
            uri: uri.to_string(),
            path: path.to_string(),
        };

        let response = client
            .read_directory(with_deadline(request, deadline))
            .await
            .map_err(map_status)?;

        Ok(response
            .into_inner()
            .entries
            .into_iter()
            .map(|e| e.name)
            .collect())
    }
}

/// Attach a per-call timeout; tonic sends it as the grpc-timeout
/// header and fails the call locally when it expires.
fn with_deadline<T>(message: T, deadline: Duration) -> Request<T> {
    let mut request = Request::new(message);
    request.set_timeout(deadline);
    request
}

fn map_status(status: Status) -> WatchError {
    match status.code() {
        Code::DeadlineExceeded | Code::Cancelled => {
            WatchError::DeadlineExceeded(status.message().to_string())
        }
        _ => WatchError::Transport(status.to_string()),
    }
}

fn proto_space(space: AddressSpace) -> sni_proto::AddressSpace {
    match space {
        AddressSpace::FxPakPro => sni_proto::AddressSpace::FxPakPro,
        AddressSpace::SnesABus => sni_proto::AddressSpace::SnesABus,
        AddressSpace::Raw => sni_proto::AddressSpace::Raw,
    }
}

fn proto_mapping(mapping: MemoryMapping) -> sni_proto::MemoryMapping {
    match mapping {
        MemoryMapping::Unknown => sni_proto::MemoryMapping::Unknown,
        MemoryMapping::HiRom => sni_proto::MemoryMapping::HiRom,
        MemoryMapping::LoRom => sni_proto::MemoryMapping::LoRom,
        MemoryMapping::ExHiRom => sni_proto::MemoryMapping::ExHiRom,
    }
}
