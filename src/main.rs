use certapi::{api, auth::AuthConfig, config, logging};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Port used when `PORT` is not set, matching the platform default.
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    config::init_config();
    logging::init_tracing();

    let config = config::get_config();
    let auth = Arc::new(AuthConfig::new(config.api_token.clone()));
    let app = api::create_router(config.variant, auth);

    let port = config.server_port.unwrap_or(DEFAULT_PORT);
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .expect("Failed to bind listener");
    tracing::info!(variant = ?config.variant, "Listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app).await.unwrap();
}
