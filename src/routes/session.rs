use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::Viewer;
use crate::services;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get session.", skip(store))]
#[get("")]
pub async fn get_handler(
    viewer: web::ReqData<Viewer>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let user = viewer.require()?;
    let view = services::session(store.get_ref().as_ref(), &user).await;

    Ok(JsonResponse::build()
        .set_id(user.id.clone())
        .set_item(view)
        .ok("OK"))
}
