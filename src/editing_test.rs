use super::*;

use axum::Router;
use axum::body::Body;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

#[test]
fn known_site_is_remapped() {
    assert_eq!(rewrite_site_query("sc_site=contentsdksite").as_deref(), Some("sc_site=plus-five-hundred-US"));
}

#[test]
fn other_pairs_keep_their_order() {
    assert_eq!(
        rewrite_site_query("secret=x&sc_site=contentsdksite&route=%2Fabout&mode=edit").as_deref(),
        Some("secret=x&sc_site=plus-five-hundred-US&route=%2Fabout&mode=edit")
    );
}

#[test]
fn unknown_site_is_left_alone() {
    assert_eq!(rewrite_site_query("sc_site=unknown-value"), None);
    assert_eq!(rewrite_site_query("sc_site=plus-five-hundred-US"), None);
}

#[test]
fn match_is_case_sensitive_and_exact() {
    assert_eq!(rewrite_site_query("sc_site=ContentSdkSite"), None);
    assert_eq!(rewrite_site_query("sc_site=contentsdksite2"), None);
    assert_eq!(rewrite_site_query("site=contentsdksite"), None);
}

#[test]
fn missing_site_param_is_left_alone() {
    assert_eq!(rewrite_site_query("secret=x&route=%2F"), None);
    assert_eq!(rewrite_site_query(""), None);
}

#[test]
fn remap_table_lookup() {
    assert_eq!(remapped_site("contentsdksite"), Some("plus-five-hundred-US"));
    assert_eq!(remapped_site("plus-five-hundred-US"), None);
}

async fn echo_query(request: Request) -> String {
    request.uri().query().unwrap_or_default().to_owned()
}

async fn call(uri: &str) -> String {
    let app = Router::new().route("/echo", get(echo_query)).layer(middleware::from_fn(remap_site_name));
    let response = app
        .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn middleware_rewrites_request_uri() {
    assert_eq!(call("/echo?mode=edit&sc_site=contentsdksite").await, "mode=edit&sc_site=plus-five-hundred-US");
}

#[tokio::test]
async fn middleware_forwards_unknown_sites_unchanged() {
    assert_eq!(call("/echo?sc_site=unknown-value&x=1").await, "sc_site=unknown-value&x=1");
    assert_eq!(call("/echo").await, "");
}
