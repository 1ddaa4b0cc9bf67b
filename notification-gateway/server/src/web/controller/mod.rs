// FIXME: remove this after this utoipa issue is fixed: https://github.com/juhaku/utoipa/pull/1423
#![allow(clippy::needless_for_each)]
mod email;
mod error;
mod health;

use axum::{routing, Extension, Router};
use gateway_axum::{Detail, JsonResponse};
use notification_gateway_core::{
    model::{HealthStatus, MessageResponse, OtpRequest, PasswordResetRequest, WelcomeRequest},
    ServerInfo, API_KEY_HEADER,
};
use utoipa::OpenApi;

pub use self::error::{Error, Result};
use crate::ServiceState;

pub fn api_router(service_state: &ServiceState) -> Router {
    Router::new()
        .route("/send-welcome-email", routing::post(email::send_welcome_email))
        .route("/send-otp-email", routing::post(email::send_otp_email))
        .route("/send-password-reset-email", routing::post(email::send_password_reset_email))
        .route("/health", routing::get(health::health))
        .with_state(service_state.clone())
}

/// Get server info
#[utoipa::path(
    get,
    operation_id = "get_server_info",
    path = "/info",
    responses(
        (status = 200, body = ServerInfo)
    ),
    tag = "Service"
)]
pub async fn server_info(
    Extension(server_info): Extension<ServerInfo>,
) -> Result<JsonResponse<ServerInfo>> {
    Ok(JsonResponse::ok(server_info))
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Notification Gateway"),
    paths(
        server_info,
        health::health,
        email::send_welcome_email,
        email::send_otp_email,
        email::send_password_reset_email,
    ),
    components(schemas(
        ServerInfo,
        Detail,
        HealthStatus,
        MessageResponse,
        WelcomeRequest,
        OtpRequest,
        PasswordResetRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Email", description = "Transactional email endpoints"),
        (name = "Service", description = "Liveness and build information")
    )
)]
pub struct ApiDoc;

/// Security scheme for the shared internal API key
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "internal_api_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new(API_KEY_HEADER),
                    ),
                ),
            );
        }
    }
}
