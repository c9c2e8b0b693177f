//!
//! Common types and utilities shared by the freight server and gateway.
//!
//! This crate aggregates:
//! - `error` — unified error type `FreightError` used across the workspace.
//! - `result` — handy `Result<T, FreightError>` alias.
//! - `net` — networking constants and small helpers.
//! - `proto` — generated protobuf/gRPC types for the freight service.
//! - `status` — pack/unpack helpers for the structured `ErrorDetails`
//!   payload carried on PERMISSION_DENIED failures.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod proto;
pub mod result;
pub mod status;

pub use error::FreightError;
pub use proto::{CalculateFreightRequest, CalculateFreightResponse, ErrorDetails};
pub use result::Result;
