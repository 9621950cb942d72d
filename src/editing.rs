//! Site-name remapping for editor and preview requests.
//!
//! The editing host sends the site name it was configured with, which does
//! not always match the site this deployment serves. Requests on the editing
//! routes pass through [`remap_site_name`], which rewrites a known `sc_site`
//! value before the handler sees it.
//!
//! Matching is on the raw (still percent-encoded) value, exact and
//! case-sensitive. Every other query pair is kept in its original order.

use axum::extract::Request;
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

pub const SITE_QUERY_PARAM: &str = "sc_site";

/// Editing-host site names and the site they stand for.
pub const SITE_NAME_REMAP: &[(&str, &str)] = &[("contentsdksite", "plus-five-hundred-US")];

#[must_use]
pub fn remapped_site(name: &str) -> Option<&'static str> {
    SITE_NAME_REMAP.iter().find(|(from, _)| *from == name).map(|(_, to)| *to)
}

/// Rewrite `query` if its `sc_site` value is in the remap table.
/// Returns `None` when nothing changes.
#[must_use]
pub fn rewrite_site_query(query: &str) -> Option<String> {
    let mut changed = false;
    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((SITE_QUERY_PARAM, value)) => match remapped_site(value) {
                Some(site) => {
                    changed = true;
                    format!("{SITE_QUERY_PARAM}={site}")
                }
                None => pair.to_owned(),
            },
            _ => pair.to_owned(),
        })
        .collect();
    changed.then(|| pairs.join("&"))
}

/// Axum middleware applying [`rewrite_site_query`] to the request URI.
pub async fn remap_site_name(mut request: Request, next: Next) -> Response {
    if let Some(query) = request.uri().query().and_then(rewrite_site_query) {
        let path_and_query = format!("{}?{query}", request.uri().path());
        let mut parts = request.uri().clone().into_parts();
        match path_and_query.parse() {
            Ok(pq) => {
                parts.path_and_query = Some(pq);
                match Uri::from_parts(parts) {
                    Ok(uri) => {
                        debug!(uri = %uri, "remapped editing site name");
                        *request.uri_mut() = uri;
                    }
                    Err(e) => warn!(error = %e, "site name remap produced invalid uri"),
                }
            }
            Err(e) => warn!(error = %e, "site name remap produced invalid query"),
        }
    }
    next.run(request).await
}

#[cfg(test)]
#[path = "editing_test.rs"]
mod tests;
