//! External Service Connectors
//!
//! Adapters for the backend platform the catalog is stored in: the
//! PostgREST-style table API (`catalog_store`) and the auth endpoint that
//! resolves bearer tokens (`auth_service`).
//!
//! ## Architecture Pattern
//!
//! 1. Trait in `{service}/connector.rs` → allows mocking in tests
//! 2. HTTP client in `{service}/client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Trait objects are injected into routes → routes never depend on HTTP details
//!
//! ```ignore
//! pub async fn list_handler(
//!     store: web::Data<Arc<dyn CatalogStore>>,
//! ) -> Result<impl Responder> {
//!     let tiers = store.list_tiers().await?;
//! }
//! ```

pub mod auth_service;
pub mod catalog_store;
pub mod config;
pub mod errors;

pub use auth_service::{AuthConnector, AuthServiceClient};
pub use catalog_store::{CatalogStore, CatalogStoreClient};
pub use config::BackendConfig;
pub use errors::ConnectorError;

pub use auth_service::init as init_auth_service;
pub use catalog_store::init as init_catalog_store;
