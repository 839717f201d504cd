use cinemastream::configuration::{AuthSettings, Settings};
use cinemastream::connectors::auth_service::mock::MockAuthConnector;
use cinemastream::connectors::catalog_store::mock::MockCatalogStore;
use cinemastream::connectors::{AuthConnector, BackendConfig, CatalogStore};
use cinemastream::models::STATUS_ACTIVE;
use std::net::TcpListener;
use std::sync::Arc;

pub const BASIC_TOKEN: &str = "basic-token";
pub const PREMIUM_TOKEN: &str = "premium-token";
pub const FRESH_TOKEN: &str = "fresh-token";

pub const BASIC_USER: &str = "user-basic";
pub const PREMIUM_USER: &str = "user-premium";
pub const FRESH_USER: &str = "user-fresh";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    store: Option<Arc<MockCatalogStore>>,
}

impl TestApp {
    pub fn store(&self) -> &MockCatalogStore {
        self.store.as_deref().expect("app is not running on the mock store")
    }

    pub fn get(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(format!("{}{}", self.address, path)), token)
    }

    pub fn post(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(format!("{}{}", self.address, path)), token)
    }

    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

pub fn test_settings(backend: BackendConfig) -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        backend,
        auth: AuthSettings::default(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(MockCatalogStore::seeded()).await
}

/// Seeded store plus three users: one on basic, one on premium, one without
/// a subscription.
pub async fn spawn_app_with_store(store: MockCatalogStore) -> TestApp {
    let store = Arc::new(store);
    store.put_subscription(BASIC_USER, "basic", STATUS_ACTIVE).await;
    store.put_subscription(PREMIUM_USER, "premium", STATUS_ACTIVE).await;

    let auth = MockAuthConnector::default()
        .with_user(BASIC_TOKEN, BASIC_USER, "basic@example.com")
        .with_user(PREMIUM_TOKEN, PREMIUM_USER, "premium@example.com")
        .with_user(FRESH_TOKEN, FRESH_USER, "fresh@example.com");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let catalog: Arc<dyn CatalogStore> = store.clone();
    let auth: Arc<dyn AuthConnector> = Arc::new(auth);
    let server = cinemastream::startup::run_with_connectors(
        listener,
        test_settings(BackendConfig::default()),
        catalog,
        auth,
    )
    .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
        store: Some(store),
    }
}

pub async fn spawn_app_with_backend(backend_url: String) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let backend = BackendConfig {
        enabled: true,
        url: backend_url,
        timeout_secs: 5,
        retry_attempts: 1,
        demo_auth: false,
        api_key: Some("project-key".to_string()),
    };
    let server = cinemastream::startup::run(listener, test_settings(backend))
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
        store: None,
    }
}
