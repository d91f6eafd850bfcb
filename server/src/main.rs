mod config;
mod document;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // A missing .env file is fine; the process environment still applies.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if config.signin_client_id.is_none() {
        tracing::warn!("SIGNIN_CLIENT_ID not set; sign-in widget will not authenticate");
    }

    let port = config.port;
    let state = state::AppState::load(config).expect("failed to load entry document");
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "refund portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
