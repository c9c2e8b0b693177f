//! Shared networking constants and helpers used by the server and gateway.

/// HTTP port on which the gateway serves `/api/fretes`.
pub const GATEWAY_PORT: u16 = 8080;
/// gRPC port on which the freight service listens.
pub const FREIGHT_PORT: u16 = 50051;

/// Helper to format an IPv4 address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Helper to format a gRPC endpoint URI like "http://ip:port".
pub fn endpoint(ip: &str, port: u16) -> String {
    format!("http://{}:{}", ip, port)
}
