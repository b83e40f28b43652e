use axum::Router;
use cinder_cdn_api::{create_api_routes, AppState};
use cinder_cdn_domain::Config;
use http::{HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = &config.server.cors_allowed_origins;
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_web_server(app: Router, config: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.bind_address, config.server.http_port
    )
    .parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
