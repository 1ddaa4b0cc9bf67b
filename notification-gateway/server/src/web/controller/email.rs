use axum::extract::State;
use gateway_axum::JsonResponse;
use notification_gateway_core::model::{
    MessageResponse, OtpRequest, PasswordResetRequest, WelcomeRequest,
};

use crate::{
    web::{
        controller::Result,
        extractor::{InternalApiKey, ValidatedJson},
    },
    ServiceState,
};

/// Send a welcome email
///
/// The email links to `<frontend_url>/login?email=<email>`.
#[utoipa::path(
    post,
    operation_id = "send_welcome_email",
    path = "/send-welcome-email",
    request_body = WelcomeRequest,
    responses(
        (status = 200, description = "Email accepted by the relay", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = gateway_axum::Detail),
        (status = 422, description = "Invalid payload", body = gateway_axum::Detail),
        (status = 500, description = "Relay error", body = gateway_axum::Detail)
    ),
    security(
        ("internal_api_key" = [])
    ),
    tag = "Email"
)]
pub async fn send_welcome_email(
    State(state): State<ServiceState>,
    InternalApiKey(api_key): InternalApiKey,
    ValidatedJson(request): ValidatedJson<WelcomeRequest>,
) -> Result<JsonResponse<MessageResponse>> {
    state.gateway.authorize(api_key.as_deref())?;

    state.gateway.send_welcome(request).await?;

    Ok(JsonResponse::ok(MessageResponse::welcome_sent()))
}

/// Send a login OTP email
///
/// The code is rendered as given together with a 5 minute validity notice.
/// The notice is text only; nothing here tracks expiry.
#[utoipa::path(
    post,
    operation_id = "send_otp_email",
    path = "/send-otp-email",
    request_body = OtpRequest,
    responses(
        (status = 200, description = "Email accepted by the relay", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = gateway_axum::Detail),
        (status = 422, description = "Invalid payload", body = gateway_axum::Detail),
        (status = 500, description = "Relay error", body = gateway_axum::Detail)
    ),
    security(
        ("internal_api_key" = [])
    ),
    tag = "Email"
)]
pub async fn send_otp_email(
    State(state): State<ServiceState>,
    InternalApiKey(api_key): InternalApiKey,
    ValidatedJson(request): ValidatedJson<OtpRequest>,
) -> Result<JsonResponse<MessageResponse>> {
    state.gateway.authorize(api_key.as_deref())?;

    state.gateway.send_otp(request).await?;

    Ok(JsonResponse::ok(MessageResponse::otp_sent()))
}

/// Send a password reset email
#[utoipa::path(
    post,
    operation_id = "send_password_reset_email",
    path = "/send-password-reset-email",
    request_body = PasswordResetRequest,
    responses(
        (status = 200, description = "Email accepted by the relay", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = gateway_axum::Detail),
        (status = 422, description = "Invalid payload", body = gateway_axum::Detail),
        (status = 500, description = "Relay error", body = gateway_axum::Detail)
    ),
    security(
        ("internal_api_key" = [])
    ),
    tag = "Email"
)]
pub async fn send_password_reset_email(
    State(state): State<ServiceState>,
    InternalApiKey(api_key): InternalApiKey,
    ValidatedJson(request): ValidatedJson<PasswordResetRequest>,
) -> Result<JsonResponse<MessageResponse>> {
    state.gateway.authorize(api_key.as_deref())?;

    state.gateway.send_password_reset(request).await?;

    Ok(JsonResponse::ok(MessageResponse::password_reset_sent()))
}
