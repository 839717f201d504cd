use crate::connectors::CatalogStore;
use crate::helpers::JsonResponse;
use crate::models::Viewer;
use crate::services::load_grid;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    #[serde(default)]
    pub featured: bool,
}

#[tracing::instrument(name = "List movie cards.", skip(store))]
#[get("")]
pub async fn list_handler(
    viewer: web::ReqData<Viewer>,
    query: web::Query<MoviesQuery>,
    store: web::Data<Arc<dyn CatalogStore>>,
) -> Result<impl Responder> {
    let grid = load_grid(store.get_ref().as_ref(), viewer.user(), query.featured).await?;

    let message = match grid.user_tier {
        Some(tier) => format!("Catalog for tier {}", tier),
        None => "OK".to_string(),
    };
    Ok(JsonResponse::<views::MovieCard>::build()
        .set_list(grid.cards)
        .ok(message))
}
