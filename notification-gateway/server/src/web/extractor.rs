use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use notification_gateway_core::API_KEY_HEADER;
use serde::de::DeserializeOwned;
use crate::web::controller::Error;

/// Extractor for the `x-internal-api-key` header.
///
/// It never rejects: a missing or non UTF-8 header yields `None` and the
/// handler decides what to do with it. That keeps payload validation ahead
/// of authorization.
///
/// # Example
///
/// ```ignore
/// pub async fn handler(
///     State(state): State<ServiceState>,
///     InternalApiKey(api_key): InternalApiKey,
///     // ... other parameters
/// ) -> Result<...> {
///     state.gateway.authorize(api_key.as_deref())?;
///     // ... handler logic
/// }
/// ```
#[derive(Clone)]
pub struct InternalApiKey(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for InternalApiKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let api_key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        if api_key.is_none() {
            tracing::debug!("No `{API_KEY_HEADER}` header found in request");
        }

        Ok(Self(api_key))
    }
}

/// JSON body extractor that ignores `Content-Type` and reports every body
/// that does not deserialize into `T` as `422 {"detail": "..."}`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|source| Error::ReadBody { source })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|source| Error::InvalidPayload { source })
    }
}
