use serde::{Deserialize, Serialize};

/// Identity resolved from the backend auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    // Bearer token forwarded to the store so row-level security applies
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl User {
    pub fn with_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }
}
