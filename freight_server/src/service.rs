//! gRPC service implementation for freight calculation.
//!
//! Maps the pricing rules onto the wire contract: rejected input becomes
//! `INVALID_ARGUMENT` with the rule's message, blocked destinations become
//! `PERMISSION_DENIED` with a structured `ErrorDetails` entry attached, and
//! everything else is a plain success response echoing the request CEP.
use log::{info, warn};
use tonic::{Request, Response, Status};

use freight_common::proto::v1::freight_service_server::FreightService;
use freight_common::status::permission_denied;
use freight_common::{CalculateFreightRequest, CalculateFreightResponse, ErrorDetails};

use crate::model::pricing::{Pricing, PricingError};

/// Error code attached to blocked-destination failures.
const BLOCKED_CODE: &str = "SEC01";

/// Stateless freight calculation service.
#[derive(Debug, Default, Clone)]
pub struct FreightServiceImpl;

#[tonic::async_trait]
impl FreightService for FreightServiceImpl {
    async fn calculate_freight(
        &self,
        request: Request<CalculateFreightRequest>,
    ) -> Result<Response<CalculateFreightResponse>, Status> {
        let cep = request.into_inner().cep;

        match Pricing::quote(&cep) {
            Ok(valor) => {
                info!("Quoted cep {}: {:.2}", cep, valor);
                Ok(Response::new(CalculateFreightResponse { cep, valor }))
            }
            Err(e @ PricingError::InvalidCep) => {
                warn!("Rejected cep {:?}: {}", cep, e);
                Err(Status::invalid_argument(e.to_string()))
            }
            Err(e @ PricingError::BlockedDestination) => {
                warn!("Blocked cep {:?}: {}", cep, e);
                Err(permission_denied(
                    &e.to_string(),
                    ErrorDetails {
                        code: BLOCKED_CODE.to_string(),
                        message: e.to_string(),
                    },
                ))
            }
        }
    }
}
