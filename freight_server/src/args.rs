//! Command-line arguments for the Freight Server.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use freight_common::net::FREIGHT_PORT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Local TCP port to bind for serving gRPC requests.
    #[clap(long, default_value_t = FREIGHT_PORT)]
    pub listen_port: u16,
}
