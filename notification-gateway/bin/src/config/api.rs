use notification_gateway_core::DEFAULT_SERVICE_NAME;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub internal_api_key: Option<String>,

    #[serde(default = "ApiConfig::default_service_name")]
    pub service_name: String,
}

impl ApiConfig {
    #[inline]
    pub fn default_service_name() -> String { DEFAULT_SERVICE_NAME.to_string() }
}

impl Default for ApiConfig {
    fn default() -> Self { Self { internal_api_key: None, service_name: Self::default_service_name() } }
}
