/// Generated gRPC protocol definitions for the SNI automation service.
///
/// This crate provides the protocol buffer definitions and generated
/// client code for talking to an SNI endpoint: device enumeration,
/// memory reads, and device filesystem access.
pub mod sni {
    pub mod v1 {
        tonic::include_proto!("sni.v1");
    }
}

// Re-export commonly used types for convenience
pub use sni::v1::*;
