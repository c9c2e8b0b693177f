//! Domain models and rules for the freight server.
//!
//! - `pricing` — CEP validation, blocked-destination checks, and the
//!   region-based fee table.
pub mod pricing;
