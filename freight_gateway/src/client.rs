//! gRPC client wrapper for the freight service.
//!
//! The underlying channel is established once at startup and shared by every
//! HTTP request; tonic channels are cheap to clone and safe to use from
//! concurrent handlers.
use std::time::Duration;

use log::info;
use tonic::transport::{Channel, Endpoint};

use freight_common::FreightError;
use freight_common::proto::SERVICE_NAME;
use freight_common::proto::v1::freight_service_client::FreightServiceClient;
use freight_common::{CalculateFreightRequest, CalculateFreightResponse};

/// Timeout for establishing the initial connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for individual RPC calls.
const RPC_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared, cloneable client for the freight service.
#[derive(Debug, Clone)]
pub struct FreightClient {
    inner: FreightServiceClient<Channel>,
}

impl FreightClient {
    /// Connect to the freight service at `uri` (e.g. `http://127.0.0.1:50051`).
    ///
    /// The connection is established eagerly so a misconfigured endpoint
    /// fails at startup rather than on the first request.
    pub async fn connect(uri: String) -> Result<Self, FreightError> {
        let endpoint = Endpoint::from_shared(uri.clone())?
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(RPC_TIMEOUT);

        let channel = endpoint.connect().await?;
        info!("Connected to {} at {}", SERVICE_NAME, uri);

        Ok(Self {
            inner: FreightServiceClient::new(channel),
        })
    }

    /// Invoke `CalculateFreight`, surfacing the raw `tonic::Status` on
    /// failure so the caller can classify it.
    pub async fn calculate(
        &self,
        request: CalculateFreightRequest,
    ) -> Result<CalculateFreightResponse, tonic::Status> {
        let mut client = self.inner.clone();
        let response = client.calculate_freight(tonic::Request::new(request)).await?;
        Ok(response.into_inner())
    }
}
