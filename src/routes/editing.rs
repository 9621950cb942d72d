//! Editing host endpoints.
//!
//! Both endpoints require the shared editing secret. When no secret is
//! configured editing is disabled and every call is refused.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use layout::LayoutRequest;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::pages::render_page;
use crate::config::SiteConfig;
use crate::state::AppState;

pub const UNAUTHORIZED_BODY: &str = "invalid editing secret";
pub const EDIT_MODE: &str = "metadata";

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub secret: Option<String>,
    pub sc_itemid: Option<String>,
    pub sc_lang: Option<String>,
    pub sc_site: Option<String>,
    pub route: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigQuery {
    pub secret: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingConfig {
    pub components: Vec<String>,
    pub packages: serde_json::Map<String, serde_json::Value>,
    pub edit_mode: &'static str,
}

fn authorized(config: &SiteConfig, provided: Option<&str>) -> bool {
    match (config.editing_secret.as_deref(), provided) {
        (Some(expected), Some(provided)) => expected == provided,
        _ => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// `GET /api/editing/render` — render a route in editing mode.
pub async fn render(State(state): State<AppState>, Query(query): Query<RenderQuery>) -> Response {
    if !authorized(&state.config, query.secret.as_deref()) {
        warn!(code = "E_EDITING_UNAUTHORIZED", "editing render refused");
        return (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response();
    }

    let route = non_empty(query.route).unwrap_or_else(|| "/".to_owned());
    let route_path = if route.starts_with('/') { route } else { format!("/{route}") };
    let request = LayoutRequest {
        route_path,
        language: non_empty(query.sc_lang).unwrap_or_else(|| state.config.default_language.clone()),
        site: non_empty(query.sc_site).unwrap_or_else(|| state.config.site_name.clone()),
    };

    info!(
        item_id = query.sc_itemid.as_deref().unwrap_or_default(),
        mode = query.mode.as_deref().unwrap_or_default(),
        path = %request.route_path,
        language = %request.language,
        site = %request.site,
        "editing render"
    );
    render_page(&state, &request, true).await
}

/// `GET /api/editing/config` — components this deployment can render.
pub async fn config(State(state): State<AppState>, Query(query): Query<ConfigQuery>) -> Response {
    if !authorized(&state.config, query.secret.as_deref()) {
        warn!(code = "E_EDITING_UNAUTHORIZED", "editing config refused");
        return (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response();
    }

    Json(EditingConfig {
        components: state.renderer.registry().names().into_iter().map(str::to_owned).collect(),
        packages: serde_json::Map::new(),
        edit_mode: EDIT_MODE,
    })
    .into_response()
}
