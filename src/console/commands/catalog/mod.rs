mod access;
mod movies;
mod tiers;

pub use access::*;
pub use movies::*;
pub use tiers::*;

use crate::configuration::get_configuration;
use crate::connectors::{self, CatalogStore};
use anyhow::Context;
use std::sync::Arc;

fn open_store() -> anyhow::Result<Arc<dyn CatalogStore>> {
    let settings = get_configuration().context("Failed to read configuration")?;
    connectors::init_catalog_store(&settings.backend).context("Failed to initialize the catalog store")
}
