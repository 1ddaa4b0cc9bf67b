use std::fmt;

use subtle::ConstantTimeEq;

/// Shared secret expected in the `x-internal-api-key` header.
#[derive(Clone, Eq, PartialEq)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new<S: Into<String>>(secret: S) -> Self { Self(secret.into()) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Compares `presented` with the secret in constant time with respect to
    /// the content of both values. An absent or empty header never matches.
    #[must_use]
    pub fn verify(&self, presented: Option<&str>) -> bool {
        presented
            .filter(|presented| !presented.is_empty())
            .is_some_and(|presented| bool::from(self.0.as_bytes().ct_eq(presented.as_bytes())))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("ApiKey(********)") }
}
