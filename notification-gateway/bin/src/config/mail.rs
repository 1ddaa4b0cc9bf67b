use notification_gateway_core::{DEFAULT_FRONTEND_URL, DEFAULT_PRODUCT_NAME};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MailConfig {
    #[serde(default)]
    pub sender_address: Option<String>,

    /// Display name in the `From` header, the product name when unset.
    #[serde(default)]
    pub sender_name: Option<String>,

    #[serde(default = "MailConfig::default_product_name")]
    pub product_name: String,

    #[serde(default = "MailConfig::default_frontend_url")]
    pub frontend_url: String,
}

impl MailConfig {
    #[inline]
    pub fn default_product_name() -> String { DEFAULT_PRODUCT_NAME.to_string() }

    #[inline]
    pub fn default_frontend_url() -> String { DEFAULT_FRONTEND_URL.to_string() }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sender_address: None,
            sender_name: None,
            product_name: Self::default_product_name(),
            frontend_url: Self::default_frontend_url(),
        }
    }
}
