//! HTTP handler for freight quote requests.
//!
//! Exposes `GET /api/fretes?cep=<string>`: the CEP is taken from the query
//! string (defaulting to the empty string when omitted) and forwarded to the
//! freight service as-is; constraint checking is entirely the remote
//! service's concern. The RPC outcome maps onto the HTTP response via
//! `ApiError::from_rpc_status` for failures, or a `FreightQuote` body on
//! success.
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, warn};
use serde::Deserialize;

use freight_common::CalculateFreightRequest;
use freight_common::proto::SERVICE_NAME;

use crate::client::FreightClient;
use crate::error::ApiError;
use crate::model::freight::FreightQuote;

/// Shared state injected into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the freight service, created once at startup.
    pub client: FreightClient,
}

/// Query parameters accepted by `GET /api/fretes`.
#[derive(Debug, Deserialize)]
pub struct FreightQuery {
    /// Destination postal code; an omitted parameter becomes the empty string.
    #[serde(default)]
    pub cep: String,
}

/// Handle a single freight quote request.
pub async fn calculate_freight(
    State(state): State<AppState>,
    Query(query): Query<FreightQuery>,
) -> Result<Json<FreightQuote>, ApiError> {
    debug!("Forwarding quote request for cep {:?}", query.cep);

    let request = CalculateFreightRequest { cep: query.cep };
    let response = state.client.calculate(request).await.map_err(|status| {
        warn!("{} call failed: {}", SERVICE_NAME, status);
        ApiError::from_rpc_status(status)
    })?;

    Ok(Json(FreightQuote {
        cep: response.cep,
        frete: response.valor,
    }))
}

/// Build the gateway router around a connected freight client.
pub fn router(client: FreightClient) -> Router {
    Router::new()
        .route("/api/fretes", get(calculate_freight))
        .with_state(AppState { client })
}
