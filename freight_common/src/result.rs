//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `FreightError`, so functions can simply return `Result<T>`.
use crate::error::FreightError;

/// Workspace-wide `Result` alias with `FreightError` as the default error.
pub type Result<T, E = FreightError> = std::result::Result<T, E>;
