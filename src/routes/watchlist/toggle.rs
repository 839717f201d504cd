use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::Viewer;
use crate::services::Watchlist;
use actix_web::{post, web, Responder, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Membership {
    pub movie_id: String,
    pub in_watchlist: bool,
}

#[tracing::instrument(name = "Toggle watchlist entry.", skip(store))]
#[post("/{movie_id}/toggle")]
pub async fn toggle_handler(
    path: web::Path<(String,)>,
    viewer: web::ReqData<Viewer>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let user = viewer.require()?;
    let movie_id = path.into_inner().0;
    let store = store.get_ref().as_ref();

    let mut watchlist = Watchlist::load(store, &user).await?;
    let in_watchlist = watchlist
        .toggle(store, &user, &movie_id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to toggle {} for {}: {}", movie_id, user.id, err);
            err
        })?;

    let message = if in_watchlist {
        "Added to watchlist"
    } else {
        "Removed from watchlist"
    };
    Ok(JsonResponse::build()
        .set_id(movie_id.clone())
        .set_item(Membership {
            movie_id,
            in_watchlist,
        })
        .ok(message))
}
