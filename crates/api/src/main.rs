use std::net::SocketAddr;

use jsonreply_api::config::ServerConfig;
use jsonreply_api::routes;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "jsonreply_api=debug,jsonreply_core=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let app = routes::build_app();

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting demo server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
