use std::collections::HashMap;

use crate::connectors::errors::ConnectorError;
use crate::models::User;

use super::AuthConnector;

pub const DEMO_TOKEN: &str = "demo-token";
pub const DEMO_USER_ID: &str = "demo-user";

/// Fixed token → user table
#[derive(Debug, Default)]
pub struct MockAuthConnector {
    users: HashMap<String, User>,
}

impl MockAuthConnector {
    pub fn with_demo_user() -> Self {
        Self::default().with_user(DEMO_TOKEN, DEMO_USER_ID, "demo@example.com")
    }

    pub fn with_user(mut self, token: &str, user_id: &str, email: &str) -> Self {
        self.users.insert(
            token.to_string(),
            User {
                id: user_id.to_string(),
                email: Some(email.to_string()),
                role: Some("authenticated".to_string()),
                access_token: None,
            },
        );
        self
    }
}

#[async_trait::async_trait]
impl AuthConnector for MockAuthConnector {
    async fn fetch_user(&self, token: &str) -> Result<User, ConnectorError> {
        self.users
            .get(token)
            .cloned()
            .map(|user| user.with_token(token.to_string()))
            .ok_or_else(|| ConnectorError::Unauthorized("unknown token".to_string()))
    }
}
