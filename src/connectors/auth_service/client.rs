use reqwest::header::ACCEPT;
use tracing::Instrument;

use crate::connectors::config::BackendConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::User;

use super::AuthConnector;

/// HTTP client for `{backend}/auth/v1/user`
pub struct AuthServiceClient {
    user_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl AuthServiceClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ConnectorError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ConnectorError::Internal("backend api key is not set".to_string()))?;
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("http client: {}", err)))?;

        Ok(Self {
            user_url: format!("{}/user", config.auth_url()),
            api_key,
            http_client,
        })
    }
}

#[async_trait::async_trait]
impl AuthConnector for AuthServiceClient {
    async fn fetch_user(&self, token: &str) -> Result<User, ConnectorError> {
        let span = tracing::info_span!("auth_fetch_user");

        let resp = self
            .http_client
            .get(&self.user_url)
            .header("apikey", self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .send()
            .instrument(span)
            .await
            .map_err(|err| {
                tracing::error!(target: "auth", error = %err, "auth request failed");
                ConnectorError::from(err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(match ConnectorError::from_status(status.as_u16(), body) {
                ConnectorError::NotFound(msg) => ConnectorError::Unauthorized(msg),
                err => err,
            });
        }

        let text = resp.text().await?;
        serde_json::from_str::<User>(&text)
            .map(|user| user.with_token(token.to_string()))
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }
}
