use axum::extract::State;
use gateway_axum::JsonResponse;
use notification_gateway_core::model::HealthStatus;

use crate::{web::controller::Result, ServiceState};

/// Liveness probe
///
/// Requires no API key and does not touch the SMTP relay.
#[utoipa::path(
    get,
    operation_id = "health",
    path = "/health",
    responses(
        (status = 200, body = HealthStatus)
    ),
    tag = "Service"
)]
pub async fn health(State(state): State<ServiceState>) -> Result<JsonResponse<HealthStatus>> {
    Ok(JsonResponse::ok(HealthStatus::healthy(state.service_name.as_str())))
}
