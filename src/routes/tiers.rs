use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::Viewer;
use crate::services::{catalog, plan_offers};
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List plan offers.", skip(store))]
#[get("")]
pub async fn list_handler(
    viewer: web::ReqData<Viewer>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let store = store.get_ref().as_ref();
    let tiers = store.list_tiers().await?;

    let current_tier = match viewer.user() {
        Some(user) => catalog::active_tier(store, user).await.unwrap_or_else(|err| {
            tracing::warn!("subscription lookup failed for {}: {}", user.id, err);
            None
        }),
        None => None,
    };

    let offers = plan_offers(&tiers, current_tier.as_deref());
    Ok(JsonResponse::<views::PlanOffer>::build()
        .set_list(offers)
        .ok("OK"))
}
