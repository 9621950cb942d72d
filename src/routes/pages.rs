//! Page routes.
//!
//! A request path is split into language and route, the layout is fetched
//! once, and the route renders into a full document. A missing route is a
//! 404; any layout failure is a 502 with a plain body.

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use layout::LayoutRequest;
use percent_encoding::percent_decode_str;
use tracing::{error, info};

use crate::error::ErrorCode;
use crate::locale::resolve_path_language;
use crate::render::PageContext;
use crate::state::AppState;

pub const NOT_FOUND_BODY: &str = "page not found";
pub const RENDER_FAILED_BODY: &str = "page did not render";

/// Fallback handler: every unmatched `GET` is a page route.
pub async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let config = &state.config;
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let (language, route_path) = resolve_path_language(&path, &config.languages, &config.default_language);
    let request = LayoutRequest { route_path, language, site: config.site_name.clone() };
    render_page(&state, &request, false).await
}

/// Fetch and render one route. Shared with the editing render endpoint.
pub(crate) async fn render_page(state: &AppState, request: &LayoutRequest, editing: bool) -> Response {
    let layout = match state.layout.fetch_layout(request).await {
        Ok(layout) => layout,
        Err(e) => {
            error!(
                code = e.error_code(),
                retryable = e.retryable(),
                error = %e,
                path = %request.route_path,
                language = %request.language,
                "layout fetch failed"
            );
            return (StatusCode::BAD_GATEWAY, RENDER_FAILED_BODY).into_response();
        }
    };

    let Some((layout, route)) = layout.as_ref().and_then(|l| l.route().map(|r| (l, r))) else {
        info!(path = %request.route_path, language = %request.language, site = %request.site, "route not found");
        return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
    };

    let page = PageContext::for_layout(layout, &request.language, &request.site, editing);
    Html(state.renderer.render_document(route, &page)).into_response()
}
