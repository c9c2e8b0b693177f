//! Generated protobuf/gRPC types for the freight service.
//!
//! The `.proto` sources live under `proto/` and are compiled by `build.rs`
//! with `tonic-prost-build`. Client and server stubs are both generated:
//! the gateway consumes `freight_service_client`, the server implements
//! `freight_service_server`.

/// Generated types for the `freight.v1` package.
#[allow(missing_docs, unused_qualifications, clippy::use_self)]
pub mod v1 {
    tonic::include_proto!("freight.v1");
}

/// Generated types for the vendored `google.rpc` package (rich status envelope).
#[allow(missing_docs, unused_qualifications, clippy::use_self)]
pub mod rpc {
    tonic::include_proto!("google.rpc");
}

pub use v1::{CalculateFreightRequest, CalculateFreightResponse, ErrorDetails};

/// Fully-qualified service name (used in logs and reflection-style lookups).
pub const SERVICE_NAME: &str = "freight.v1.FreightService";
