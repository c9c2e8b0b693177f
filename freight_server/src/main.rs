//! Freight quote gRPC server.
//!
//! This binary serves `freight.v1.FreightService` over TCP. Each
//! `CalculateFreight` call is handled independently by the stateless
//! `FreightServiceImpl`:
//!
//! - A well-formed CEP (eight digits, optional hyphen) gets a deterministic
//!   fee looked up by postal region; the response echoes the request CEP.
//! - A malformed CEP fails `INVALID_ARGUMENT` with a human-readable message.
//! - A blocked destination (digits ending in `333`) fails
//!   `PERMISSION_DENIED` with an `ErrorDetails {code, message}` payload
//!   packed into the rich status envelope, so clients can surface the
//!   specific refusal reason.
//!
//! The pricing rules live under `model::pricing`; this file only wires the
//! listener, the service, and shutdown handling together.
#![warn(missing_docs)]
mod args;
mod model;
mod service;

use clap::Parser;
use log::{error, info};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use freight_common::Result;
use freight_common::net::addr;
use freight_common::proto::SERVICE_NAME;
use freight_common::proto::v1::freight_service_server::FreightServiceServer;

use crate::args::Args;
use crate::service::FreightServiceImpl;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(addr("0.0.0.0", args.listen_port)).await?;
    info!("{} listening on: {}", SERVICE_NAME, listener.local_addr()?);

    Server::builder()
        .add_service(FreightServiceServer::new(FreightServiceImpl::default()))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown_signal())
        .await?;

    info!("Freight server stopped.");
    Ok(())
}

/// Resolves once Ctrl+C is received, letting in-flight calls finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
