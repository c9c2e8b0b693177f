//! Command-line arguments for the Freight Gateway.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use freight_common::net::{FREIGHT_PORT, GATEWAY_PORT, endpoint};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Local TCP port to bind for serving HTTP requests.
    #[clap(long, default_value_t = GATEWAY_PORT)]
    pub listen_port: u16,

    /// Endpoint URI of the freight gRPC service (e.g. http://127.0.0.1:50051).
    #[clap(long, default_value_t = endpoint("127.0.0.1", FREIGHT_PORT))]
    pub freight_addr: String,
}
