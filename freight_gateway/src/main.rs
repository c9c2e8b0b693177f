//! Freight Gateway — HTTP front door for the freight quote service. It serves
//! `GET /api/fretes?cep=<string>`, forwards the CEP to the freight gRPC
//! service, and translates the outcome into an HTTP response: 200 with the
//! quote on success, 400 for rejected input, 403 for blocked destinations
//! (carrying the structured detail when the service attaches one), and 500
//! for anything else.
//!
//! Usage example (CLI):
//! ```bash
//! freight_gateway --listen-port 8080 --freight-addr http://127.0.0.1:50051
//! ```
//!
//! The gRPC channel is established once at startup and shared by all
//! requests; see `client` for details.
#![warn(missing_docs)]
mod args;
mod client;
mod error;
mod handler;
mod model;

use clap::Parser;
use log::{error, info};

use freight_common::Result;
use freight_common::net::addr;

use crate::args::Args;
use crate::client::FreightClient;
use crate::handler::router;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    info!("Connecting to freight service at {}", args.freight_addr);
    let client = FreightClient::connect(args.freight_addr.clone()).await?;
    let app = router(client);

    let listener = tokio::net::TcpListener::bind(addr("0.0.0.0", args.listen_port)).await?;
    info!("Freight gateway listening on: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Freight gateway stopped.");
    Ok(())
}

/// Resolves once Ctrl+C is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Ctrl+C received. Shutting down gateway...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
