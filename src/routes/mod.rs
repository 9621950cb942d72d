//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole site:
//! - `/healthz` for load balancers
//! - `/api/editing/*` for the CMS editing host, behind site-name remapping and permissive CORS
//! - `/assets/*` as static files from `PUBLIC_DIR`
//! - every other path as a rendered page

pub mod editing;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::editing::remap_site_name;
use crate::state::AppState;

/// Routes called by the editing host.
fn editing_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/editing/render", get(editing::render))
        .route("/api/editing/config", get(editing::config))
        .route_layer(middleware::from_fn(remap_site_name))
        .layer(cors)
}

pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(editing_routes())
        .nest_service("/assets", assets)
        .fallback(pages::page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
