//! Freight quote payload returned to HTTP callers.
//!
//! Quotes are sent as JSON-encoded bodies; field names follow the public API
//! contract (`cep`, `frete`).
use serde::{Deserialize, Serialize};

/// Freight quote for a single destination postal code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreightQuote {
    /// Destination postal code echoed from the freight service.
    pub cep: String,
    /// Calculated shipping fee.
    pub frete: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_api_field_names() {
        let quote = FreightQuote {
            cep: "01001000".to_string(),
            frete: 25.5,
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({"cep": "01001000", "frete": 25.5}));
    }
}
