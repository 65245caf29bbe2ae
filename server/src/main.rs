mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if config.client.google_client_id.is_none() {
        tracing::warn!("GOOGLE_CLIENT_ID not set; Google sign-in disabled");
    }

    let app = routes::leptos_app(config.client.clone()).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api = %config.client.api_base_url, "icy listening");
    axum::serve(listener, app).await.expect("server failed");
}
