use std::sync::Arc;

use xmc_site::error::ErrorCode;
use xmc_site::{components, config, layout_service, render, routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let layout = match layout_service::GraphQlLayoutService::new(
        config.graphql_endpoint.clone(),
        config.auth.clone(),
        config.timeouts,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "layout client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = layout.endpoint(), site = %config.site_name, "layout service configured");
    if config.editing_secret.is_none() {
        tracing::warn!("SITECORE_EDITING_SECRET not set; editing endpoints disabled");
    }

    let renderer = render::Renderer::new(Arc::new(components::default_registry()));
    let port = config.port;
    let state = state::AppState::new(config, Arc::new(layout), renderer);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "site listening");
    axum::serve(listener, app).await.expect("server failed");
}
