use crate::services::plan_offers;
use actix_web::rt;

/// Prints the tiers in rank order
pub struct TiersCommand {}

impl TiersCommand {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TiersCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::console::commands::CallableTrait for TiersCommand {
    fn call(&self) -> anyhow::Result<()> {
        rt::System::new().block_on(async {
            let store = super::open_store()?;
            let tiers = store.list_tiers().await?;

            for offer in plan_offers(&tiers, None) {
                println!(
                    "{:>3}  {:<16} {:>9}  {} / {} devices{}",
                    offer.rank,
                    offer.id,
                    offer.price_label,
                    offer.max_quality,
                    offer.max_devices,
                    if offer.is_highlighted { "  *" } else { "" }
                );
            }

            Ok(())
        })
    }
}
