use std::net::SocketAddr;
use std::sync::Arc;

use taskboard_server::{
    app_state::AppState, data_access::data_context::DataContext, map_routes, settings::Settings,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_server=info".into()),
        )
        .init();

    // ── Settings ───────────────────────────────────────────────
    let settings = Settings::load().expect("Failed to load settings");

    // ── Store ──────────────────────────────────────────────────
    let data_context = DataContext::new(&settings.database_url)
        .await
        .expect("Failed to open task database");

    // ── Shared state ───────────────────────────────────────────
    let state = Arc::new(AppState { data_context });

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    let addr: SocketAddr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    )
    .parse()
    .expect("Invalid socket binding in settings");
    info!("Server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
