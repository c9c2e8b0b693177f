//! Pack/unpack helpers for structured gRPC failure details.
//!
//! PERMISSION_DENIED failures carry a `google.rpc.Status` envelope in the
//! status-details binary metadata. The envelope holds a list of
//! `google.protobuf.Any` entries; the freight service packs a single
//! `ErrorDetails {code, message}` as the first entry, and the gateway
//! unpacks only that first entry. Anything that cannot be decoded is
//! treated as "no detail available", never as a hard failure.
use prost::Message;
use tonic::Code;

use crate::proto::rpc;
use crate::proto::v1::ErrorDetails;

/// Type URL under which `ErrorDetails` is packed into `google.protobuf.Any`.
pub const ERROR_DETAILS_TYPE_URL: &str = "type.googleapis.com/freight.v1.ErrorDetails";

/// Build a PERMISSION_DENIED status carrying `details` as its first (and
/// only) structured detail entry.
///
/// The plain `message` stays readable for callers that ignore the details
/// bytes entirely.
pub fn permission_denied(message: &str, details: ErrorDetails) -> tonic::Status {
    let envelope = rpc::Status {
        code: Code::PermissionDenied as i32,
        message: message.to_string(),
        details: vec![prost_types::Any {
            type_url: ERROR_DETAILS_TYPE_URL.to_string(),
            value: details.encode_to_vec(),
        }],
    };

    tonic::Status::with_details(
        Code::PermissionDenied,
        message,
        envelope.encode_to_vec().into(),
    )
}

/// Extract the structured `ErrorDetails` from a failed RPC status, if any.
///
/// Consults only the first entry of the details list. Returns `None` when
/// the status carries no details bytes, the envelope or the entry does not
/// decode, or the first entry holds a different message type.
pub fn error_details(status: &tonic::Status) -> Option<ErrorDetails> {
    let bytes = status.details();
    if bytes.is_empty() {
        return None;
    }

    let envelope = rpc::Status::decode(bytes).ok()?;
    let first = envelope.details.first()?;
    if first.type_url != ERROR_DETAILS_TYPE_URL {
        return None;
    }

    ErrorDetails::decode(first.value.as_slice()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocked_details() -> ErrorDetails {
        ErrorDetails {
            code: "SEC01".to_string(),
            message: "cep bloqueado".to_string(),
        }
    }

    fn status_with_envelope(envelope: rpc::Status) -> tonic::Status {
        tonic::Status::with_details(
            Code::PermissionDenied,
            "cep bloqueado",
            envelope.encode_to_vec().into(),
        )
    }

    #[test]
    fn pack_unpack_round_trip() {
        let status = permission_denied("cep bloqueado", blocked_details());

        assert_eq!(status.code(), Code::PermissionDenied);
        assert_eq!(status.message(), "cep bloqueado");

        let details = error_details(&status).expect("details should decode");
        assert_eq!(details.code, "SEC01");
        assert_eq!(details.message, "cep bloqueado");
    }

    #[test]
    fn plain_status_has_no_details() {
        let status = tonic::Status::permission_denied("cep bloqueado");
        assert!(error_details(&status).is_none());
    }

    #[test]
    fn empty_details_list_yields_none() {
        let envelope = rpc::Status {
            code: Code::PermissionDenied as i32,
            message: "cep bloqueado".to_string(),
            details: Vec::new(),
        };
        assert!(error_details(&status_with_envelope(envelope)).is_none());
    }

    #[test]
    fn foreign_type_url_yields_none() {
        let envelope = rpc::Status {
            code: Code::PermissionDenied as i32,
            message: "cep bloqueado".to_string(),
            details: vec![prost_types::Any {
                type_url: "type.googleapis.com/google.rpc.DebugInfo".to_string(),
                value: blocked_details().encode_to_vec(),
            }],
        };
        assert!(error_details(&status_with_envelope(envelope)).is_none());
    }

    #[test]
    fn only_first_entry_is_consulted() {
        // A decodable entry in second position must not rescue a foreign
        // first entry.
        let envelope = rpc::Status {
            code: Code::PermissionDenied as i32,
            message: "cep bloqueado".to_string(),
            details: vec![
                prost_types::Any {
                    type_url: "type.googleapis.com/google.rpc.DebugInfo".to_string(),
                    value: Vec::new(),
                },
                prost_types::Any {
                    type_url: ERROR_DETAILS_TYPE_URL.to_string(),
                    value: blocked_details().encode_to_vec(),
                },
            ],
        };
        assert!(error_details(&status_with_envelope(envelope)).is_none());
    }

    #[test]
    fn corrupt_envelope_yields_none() {
        let status = tonic::Status::with_details(
            Code::PermissionDenied,
            "cep bloqueado",
            vec![0xff, 0xff, 0xff, 0xff].into(),
        );
        assert!(error_details(&status).is_none());
    }
}
