use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::{self, Viewer};
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get active subscription.", skip(store))]
#[get("")]
pub async fn get_handler(
    viewer: web::ReqData<Viewer>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let user = viewer.require()?;
    let subscription = store
        .get_active_subscription(&user)
        .await?
        .ok_or_else(|| {
            JsonResponse::<models::Subscription>::build().not_found("No active subscription")
        })?;

    Ok(JsonResponse::build()
        .set_id(subscription.id.clone())
        .set_item(subscription)
        .ok("OK"))
}
