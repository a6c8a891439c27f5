//! SMS gateway configuration module

use serde::{Deserialize, Serialize};

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsGatewayConfig {
    /// Gateway provider ("zhenzi", "mock")
    pub provider: String,

    /// Gateway API base URL
    pub api_url: String,

    /// Application id issued by the gateway
    pub app_id: String,

    /// Application secret issued by the gateway
    pub app_secret: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for SmsGatewayConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::from("https://sms_developer.zhenzikj.com"),
            app_id: String::new(),
            app_secret: String::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl SmsGatewayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let api_url = std::env::var("SMS_API_URL")
            .unwrap_or_else(|_| "https://sms_developer.zhenzikj.com".to_string());
        let app_id = std::env::var("SMS_APP_ID").unwrap_or_default();
        let app_secret = std::env::var("SMS_APP_SECRET").unwrap_or_default();

        Self {
            provider,
            api_url,
            app_id,
            app_secret,
            ..Default::default()
        }
    }

    /// True when real gateway credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_secret.is_empty()
    }
}

fn default_request_timeout() -> u64 {
    10
}
