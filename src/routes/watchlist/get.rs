use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::Viewer;
use crate::services::Watchlist;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get watchlist.", skip(store))]
#[get("")]
pub async fn list_handler(
    viewer: web::ReqData<Viewer>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let user = viewer.require()?;
    let watchlist = Watchlist::load(store.get_ref().as_ref(), &user).await?;

    Ok(JsonResponse::<String>::build()
        .set_list(watchlist.movie_ids())
        .ok("OK"))
}
