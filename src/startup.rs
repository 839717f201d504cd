use crate::configuration::Settings;
use crate::connectors::{self, AuthConnector, CatalogStore};
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let store = connectors::init_catalog_store(&settings.backend)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let auth = connectors::init_auth_service(&settings.backend)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    run_with_connectors(listener, settings, store, auth)
}

/// Start the server on already-built connectors
pub fn run_with_connectors(
    listener: TcpListener,
    settings: Settings,
    store: Arc<dyn CatalogStore>,
    auth: Arc<dyn AuthConnector>,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let auth = web::Data::new(auth);
    let token_cache = web::Data::new(middleware::authentication::TokenCache::new(
        Duration::from_secs(settings.auth.cache_ttl_secs),
    ));
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let detail = match &err {
            error::JsonPayloadError::Deserialize(err) => serde_json::json!({
                "kind": "deserialize",
                "line": err.line(),
                "column": err.column(),
                "msg": err.to_string(),
            }),
            _ => serde_json::json!({"kind": "other", "msg": err.to_string()}),
        };
        JsonResponse::<()>::build().bad_request(detail.to_string())
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/tiers").service(routes::tiers::list_handler))
            .service(web::scope("/movies").service(routes::movies::list_handler))
            .service(
                web::scope("/watchlist")
                    .service(routes::watchlist::list_handler)
                    .service(routes::watchlist::toggle_handler),
            )
            .service(
                web::scope("/subscription")
                    .service(routes::subscription::get_handler)
                    .service(routes::subscription::add_handler),
            )
            .service(web::scope("/me").service(routes::session::get_handler))
            .app_data(json_config.clone())
            .app_data(store.clone())
            .app_data(auth.clone())
            .app_data(token_cache.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
