//! Data model types returned to HTTP callers.
//!
//! This module groups the simple serializable types used by the gateway:
//! - `freight` — freight quote payload returned on success.
pub mod freight;
