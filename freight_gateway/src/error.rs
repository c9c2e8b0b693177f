//! HTTP error taxonomy and RPC failure classification.
//!
//! Every failed `CalculateFreight` call is translated into exactly one of
//! three HTTP outcomes:
//!
//! - `INVALID_ARGUMENT` → 400 with the remote description.
//! - `PERMISSION_DENIED` → 403, preferring the structured
//!   `ErrorDetails {code, message}` carried in the status details (rendered
//!   as `"code: message"`) and falling back to the remote description when
//!   no detail is attached or it does not decode.
//! - anything else → 500 with the library's rendering of the failure.
//!
//! There is no retry and no fallback quote; a single remote failure is a
//! single HTTP failure.
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tonic::Code;

use freight_common::status::error_details;

/// Error type returned to HTTP callers, one variant per response class.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    /// The freight service rejected the request input (maps to 400).
    #[error("{0}")]
    BadRequest(String),

    /// The freight service refused the destination (maps to 403).
    #[error("{0}")]
    Forbidden(String),

    /// Any other remote failure (maps to 500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Classify a failed RPC into its HTTP outcome.
    ///
    /// The remote description (`Status::message`) feeds the 400 and the
    /// plain 403 branches; the 500 branch keeps the library's own failure
    /// rendering, which also names the status code.
    pub fn from_rpc_status(status: tonic::Status) -> Self {
        let description = status.message().to_string();

        match status.code() {
            Code::InvalidArgument => ApiError::BadRequest(description),
            Code::PermissionDenied => match error_details(&status) {
                Some(details) => {
                    ApiError::Forbidden(format!("{}: {}", details.code, details.message))
                }
                None => ApiError::Forbidden(description),
            },
            _ => ApiError::Internal(status.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({"message": self.to_string()});

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_common::ErrorDetails;
    use freight_common::status::permission_denied;

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let status = tonic::Status::invalid_argument("cep inválido");
        assert_eq!(
            ApiError::from_rpc_status(status),
            ApiError::BadRequest("cep inválido".to_string())
        );
    }

    #[test]
    fn permission_denied_without_details_keeps_description() {
        let status = tonic::Status::permission_denied("acesso negado");
        assert_eq!(
            ApiError::from_rpc_status(status),
            ApiError::Forbidden("acesso negado".to_string())
        );
    }

    #[test]
    fn permission_denied_with_details_renders_code_and_message() {
        let status = permission_denied(
            "cep bloqueado",
            ErrorDetails {
                code: "C1".to_string(),
                message: "M1".to_string(),
            },
        );
        assert_eq!(
            ApiError::from_rpc_status(status),
            ApiError::Forbidden("C1: M1".to_string())
        );
    }

    #[test]
    fn permission_denied_with_corrupt_details_falls_back_to_description() {
        let status = tonic::Status::with_details(
            Code::PermissionDenied,
            "acesso negado",
            vec![0xff, 0xff, 0xff, 0xff].into(),
        );
        assert_eq!(
            ApiError::from_rpc_status(status),
            ApiError::Forbidden("acesso negado".to_string())
        );
    }

    #[test]
    fn other_codes_map_to_internal() {
        for status in [
            tonic::Status::unavailable("connection refused"),
            tonic::Status::internal("boom"),
            tonic::Status::deadline_exceeded("too slow"),
        ] {
            match ApiError::from_rpc_status(status) {
                ApiError::Internal(message) => assert!(!message.is_empty()),
                other => panic!("expected Internal, got {:?}", other),
            }
        }
    }

    #[test]
    fn internal_keeps_the_library_failure_rendering() {
        let status = tonic::Status::unavailable("connection refused");
        let rendered = status.to_string();

        assert_eq!(
            ApiError::from_rpc_status(tonic::Status::unavailable("connection refused")),
            ApiError::Internal(rendered)
        );
    }
}
