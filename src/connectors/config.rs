use serde::{Deserialize, Serialize};

/// Connection settings for the backend platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Use the HTTP connectors; when false the in-memory mocks are used
    pub enabled: bool,
    /// Project URL, e.g. https://project.example.co
    pub url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Attempts for read requests; writes are sent once
    pub retry_attempts: usize,
    /// Accept the fixed demo token while the backend is disabled
    #[serde(default)]
    pub demo_auth: bool,
    /// Project key sent as `apikey` (from env: BACKEND_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://127.0.0.1:54321".to_string(),
            timeout_secs: 10,
            retry_attempts: 3,
            demo_auth: false,
            api_key: None,
        }
    }
}

impl BackendConfig {
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url.trim_end_matches('/'))
    }
}
