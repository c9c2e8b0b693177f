//! Error types shared between the freight server and gateway.
//!
//! The `FreightError` enum unifies the failure cases of process startup and
//! transport wiring (socket binding, channel establishment), allowing both
//! binaries to propagate a single error type out of `main`.
use std::io;

use thiserror::Error;

/// Unified error type shared by the server and gateway binaries.
#[derive(Error, Debug)]
pub enum FreightError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// gRPC transport error while establishing or serving a connection.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}
