mod client;
pub mod mock;

pub use client::AuthServiceClient;

use std::sync::Arc;

use crate::connectors::config::BackendConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::User;

/// Resolves bearer tokens issued by the backend's auth subsystem
#[async_trait::async_trait]
pub trait AuthConnector: Send + Sync {
    /// The user behind `token`; `Unauthorized` for unknown or expired tokens
    async fn fetch_user(&self, token: &str) -> Result<User, ConnectorError>;
}

pub fn init(config: &BackendConfig) -> Result<Arc<dyn AuthConnector>, ConnectorError> {
    if config.enabled {
        tracing::info!("Initializing auth connector: {}", config.auth_url());
        Ok(Arc::new(AuthServiceClient::new(config)?))
    } else if config.demo_auth {
        tracing::warn!(
            token = mock::DEMO_TOKEN,
            user_id = mock::DEMO_USER_ID,
            "Backend connector disabled - mock auth accepts the demo token"
        );
        Ok(Arc::new(mock::MockAuthConnector::with_demo_user()))
    } else {
        tracing::warn!("Backend connector disabled - every bearer token is rejected");
        Ok(Arc::new(mock::MockAuthConnector::default()))
    }
}
