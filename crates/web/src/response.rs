pub use axum::http::StatusCode;
use axum::{
    body,
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A JSON body paired with the status code it is sent with.
#[derive(Clone, Debug)]
pub struct JsonResponse<T> {
    status_code: StatusCode,

    body: T,
}

impl<T> JsonResponse<T> {
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn ok(body: T) -> Self { Self { status_code: StatusCode::OK, body } }

    #[inline]
    #[must_use]
    pub const fn status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> StatusCode { self.status_code }

    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_body(self) -> T { self.body }
}

impl<T> IntoResponse for JsonResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let body = body::Body::from(serde_json::to_vec(&self.body).expect("body is serializable"));

        Response::builder()
            .status(self.status_code)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .expect("Build `Axum` response successfully; qed")
    }
}

/// Error body, rendered as `{"detail": "..."}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct Detail {
    #[schema(example = "Invalid API key")]
    pub detail: String,
}

impl Detail {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(detail: S) -> Self { Self { detail: detail.into() } }
}

#[macro_export]
macro_rules! json_response {
    (status: $status:expr,data: $data:expr) => {
        $crate::response::JsonResponse::ok($data).status_code($status).into_response()
    };

    (status: $status:expr,detail: $detail:expr) => {
        $crate::response::JsonResponse::ok($crate::response::Detail::new($detail))
            .status_code($status)
            .into_response()
    };

    (reason: $reason:expr,status: $status:expr,detail: $detail:expr) => {{
        let status = $status;
        if status.is_server_error() {
            tracing::error!(status_code = status.as_u16(), "Internal Server Error: {:?}", $reason);
        } else {
            tracing::warn!(status_code = status.as_u16(), "Response Error: {:?}", $reason);
        }

        $crate::json_response! { status: status, detail: $detail }
    }};
}
