use serde_json::{Value, json};

use crate::domain::common::entities::app_errors::CoreError;

/// Upstream reply forwarded as-is: the caller re-emits both the status
/// code and the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

/// Pass-through client for the external conversations API. The caller's
/// bearer token is forwarded untouched.
pub struct ConversationsProxyClient {
    http: reqwest::Client,
    api_url: String,
}

impl ConversationsProxyClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
        }
    }

    pub async fn fetch(&self, bearer_token: &str) -> Result<UpstreamResponse, CoreError> {
        let response = self
            .http
            .get(&self.api_url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|err| CoreError::ExternalServiceError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| json!({ "message": "External API error" }));
        Ok(UpstreamResponse { status, body })
    }
}
