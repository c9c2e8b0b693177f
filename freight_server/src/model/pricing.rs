//! CEP validation and fee calculation rules.
//!
//! A CEP is eight ASCII digits, optionally written with a hyphen before the
//! final three (`01001000` or `01001-000`). The shipping fee is looked up by
//! postal region — the leading digit — in a fixed base-fee table. Destinations
//! whose digits end in the blocked suffix are refused outright.
use thiserror::Error;

/// Base shipping fee per postal region (indexed by the CEP's leading digit).
const REGION_BASE_FEES: [f64; 10] = [
    25.5, 27.9, 31.4, 36.8, 42.3, 47.7, 53.1, 58.6, 64.2, 69.9,
];

/// Digit suffix marking a destination as blocked for delivery.
const BLOCKED_SUFFIX: &str = "333";

/// Reasons a CEP cannot be quoted.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The CEP does not have the expected 8-digit shape.
    #[error("cep inválido")]
    InvalidCep,
    /// The destination is blocked for delivery.
    #[error("cep bloqueado")]
    BlockedDestination,
}

/// Stateless fee calculator for destination CEPs.
pub struct Pricing;

impl Pricing {
    /// Validate `cep` and compute its shipping fee.
    pub fn quote(cep: &str) -> Result<f64, PricingError> {
        let digits = Self::normalize(cep).ok_or(PricingError::InvalidCep)?;

        if digits.ends_with(BLOCKED_SUFFIX) {
            return Err(PricingError::BlockedDestination);
        }

        Ok(Self::fee_for(&digits))
    }

    /// Strip the optional hyphen and check the 8-digit shape.
    ///
    /// Returns the bare digit string, or `None` when the input does not
    /// match either accepted form.
    fn normalize(cep: &str) -> Option<String> {
        let digits = match cep.split_once('-') {
            Some((prefix, suffix)) if prefix.len() == 5 && suffix.len() == 3 => {
                format!("{}{}", prefix, suffix)
            }
            Some(_) => return None,
            None => cep.to_string(),
        };

        if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(digits)
        } else {
            None
        }
    }

    /// Fee lookup for a normalized digit string.
    fn fee_for(digits: &str) -> f64 {
        let region = usize::from(digits.as_bytes()[0] - b'0');
        REGION_BASE_FEES[region]
    }
}
