use std::sync::Arc;

use crate::connectors::config::BackendConfig;
use crate::connectors::errors::ConnectorError;
use crate::connectors::catalog_store::{mock, CatalogStore, CatalogStoreClient};

/// Build the catalog store from settings.
///
/// A disabled backend falls back to the seeded in-memory store, which is
/// what local runs and the console use without a project key.
pub fn init(config: &BackendConfig) -> Result<Arc<dyn CatalogStore>, ConnectorError> {
    if config.enabled {
        tracing::info!("Initializing catalog store connector: {}", config.rest_url());
        Ok(Arc::new(CatalogStoreClient::new(config.clone())?))
    } else {
        tracing::warn!("Backend connector disabled - using in-memory catalog");
        Ok(Arc::new(mock::MockCatalogStore::seeded()))
    }
}
