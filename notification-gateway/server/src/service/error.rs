use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gateway_axum::json_response;
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid API key"))]
    Unauthorized,

    /// The detail reported to the caller is the text of the underlying error.
    #[snafu(display("{source}"))]
    Dispatch { kind: &'static str, source: notification::Error },
}

impl IntoResponse for Error {
    // SAFETY: allow: high cognitive complexity caused by `tracing` macro
    #[allow(clippy::cognitive_complexity)]
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => json_response! {
                reason: self,
                status: StatusCode::UNAUTHORIZED,
                detail: self.to_string()
            },
            Self::Dispatch { .. } => json_response! {
                reason: self,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: self.to_string()
            },
        }
    }
}
