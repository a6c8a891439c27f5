//! Zhenzi SMS gateway client
//!
//! Sends the registration-code message through the Zhenzi HTTP API. The
//! gateway answers HTTP 200 with a JSON body whose `code` field carries
//! the real outcome; zero means accepted.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use pw_core::services::{GatewayError, SmsGateway};
use pw_shared::config::sms_gateway::SmsGatewayConfig;
use pw_shared::utils::phone::mask_mobile;

use crate::InfrastructureError;

use super::registration_message;

/// Response body of `/sms/send.html`
#[derive(Debug, Deserialize)]
struct ZhenziResponse {
    code: i64,
}

/// HTTP client for the Zhenzi SMS gateway
pub struct ZhenziSmsClient {
    client: Client,
    api_url: String,
    app_id: String,
    app_secret: String,
}

impl ZhenziSmsClient {
    pub fn new(config: SmsGatewayConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url,
            app_id: config.app_id,
            app_secret: config.app_secret,
        })
    }
}

#[async_trait]
impl SmsGateway for ZhenziSmsClient {
    async fn send_code(&self, mobile: &str, code: &str) -> Result<(), GatewayError> {
        let message = registration_message(code);
        let url = format!("{}/sms/send.html", self.api_url);

        let response = self
            .client
            .post(&url)
            .form(&[
                ("appId", self.app_id.as_str()),
                ("appSecret", self.app_secret.as_str()),
                ("number", mobile),
                ("message", message.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport {
                message: format!("gateway answered HTTP {}", status),
            });
        }

        let body: ZhenziResponse =
            response.json().await.map_err(|e| GatewayError::Transport {
                message: format!("unreadable gateway response: {}", e),
            })?;

        if body.code == 0 {
            debug!(mobile = %mask_mobile(mobile), "Gateway accepted the message");
            Ok(())
        } else {
            Err(GatewayError::Rejected { code: body.code })
        }
    }
}
