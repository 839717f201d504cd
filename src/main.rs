use cinemastream::configuration::get_configuration;
use cinemastream::startup::run;
use cinemastream::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("cinemastream".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        backend_url = %settings.backend.url,
        backend_enabled = settings.backend.enabled,
        "Using catalog backend"
    );

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, settings).await?.await
}
