use crate::connectors::CatalogStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{self, Viewer};
use crate::services;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Subscribe to tier.", skip(store))]
#[post("")]
pub async fn add_handler(
    viewer: web::ReqData<Viewer>,
    form: web::Json<forms::SubscribeForm>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let user = viewer.require()?;
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Subscription>::build().form_error(errors.to_string()));
    }

    let subscription =
        services::subscribe(store.get_ref().as_ref(), &user, form.tier_id()).await?;

    Ok(JsonResponse::build()
        .set_id(subscription.id.clone())
        .set_item(subscription)
        .ok("Subscription updated"))
}
