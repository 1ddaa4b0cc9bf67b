use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gateway_axum::json_response;
use snafu::Snafu;

use crate::service::error::Error as ServiceError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Service { source: ServiceError },

    #[snafu(display("{source}"))]
    ReadBody { source: BytesRejection },

    #[snafu(display("{source}"))]
    InvalidPayload { source: serde_json::Error },
}

impl From<ServiceError> for Error {
    fn from(source: ServiceError) -> Self { Self::Service { source } }
}

impl IntoResponse for Error {
    // SAFETY: allow: high cognitive complexity caused by `tracing` macro
    #[allow(clippy::cognitive_complexity)]
    fn into_response(self) -> Response {
        match self {
            Self::Service { source } => source.into_response(),
            Self::ReadBody { ref source } => json_response! {
                reason: self,
                status: source.status(),
                detail: source.body_text()
            },
            Self::InvalidPayload { .. } => json_response! {
                reason: self,
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: self.to_string()
            },
        }
    }
}
