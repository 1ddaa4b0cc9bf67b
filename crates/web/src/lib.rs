//! Response helpers shared by the HTTP handlers of the notification gateway.
//!
//! Every body is plain JSON: successful payloads are serialized as is and
//! errors are reported as `{"detail": "..."}`.

pub mod response;

pub use self::response::{Detail, JsonResponse};
