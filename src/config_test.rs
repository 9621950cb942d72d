use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    SiteConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_defaults_with_api_key() {
    let cfg = config_from(&[("SITECORE_API_KEY", "key-1")]).unwrap();
    assert_eq!(cfg.auth, EdgeAuth::ApiKey("key-1".into()));
    assert_eq!(cfg.graphql_endpoint, "https://edge-platform.sitecorecloud.io/v1/content/api/graphql/v1");
    assert_eq!(cfg.site_name, DEFAULT_SITE_NAME);
    assert_eq!(cfg.default_language, "en");
    assert_eq!(cfg.languages, vec!["en".to_owned()]);
    assert!(cfg.editing_secret.is_none());
    assert_eq!(
        cfg.timeouts,
        LayoutTimeouts {
            request_secs: DEFAULT_LAYOUT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_LAYOUT_CONNECT_TIMEOUT_SECS
        }
    );
    assert_eq!(cfg.public_dir, PathBuf::from("public"));
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_prefers_context_id_and_parses_overrides() {
    let cfg = config_from(&[
        ("SITECORE_EDGE_CONTEXT_ID", "ctx-1"),
        ("SITECORE_API_KEY", "key-1"),
        ("SITECORE_EDGE_URL", "https://edge.example.test/"),
        ("SITECORE_SITE_NAME", "plus-five-hundred-EU"),
        ("DEFAULT_LANGUAGE", "EN"),
        ("SUPPORTED_LANGUAGES", "ar, he ,fr,"),
        ("SITECORE_EDITING_SECRET", "s3cret"),
        ("LAYOUT_REQUEST_TIMEOUT_SECS", "30"),
        ("LAYOUT_CONNECT_TIMEOUT_SECS", "2"),
        ("PORT", "8080"),
    ])
    .unwrap();

    assert_eq!(cfg.auth, EdgeAuth::ContextId("ctx-1".into()));
    assert_eq!(cfg.graphql_endpoint, "https://edge.example.test/v1/content/api/graphql/v1");
    assert_eq!(cfg.site_name, "plus-five-hundred-EU");
    assert_eq!(cfg.languages, vec!["en", "ar", "he", "fr"]);
    assert_eq!(cfg.editing_secret.as_deref(), Some("s3cret"));
    assert_eq!(cfg.timeouts, LayoutTimeouts { request_secs: 30, connect_secs: 2 });
    assert_eq!(cfg.port, 8080);
}

#[test]
fn explicit_graphql_endpoint_wins() {
    let cfg = config_from(&[
        ("SITECORE_API_KEY", "key-1"),
        ("SITECORE_EDGE_URL", "https://ignored.test"),
        ("GRAPH_QL_ENDPOINT", "https://cm.local/sitecore/api/graph/edge"),
    ])
    .unwrap();
    assert_eq!(cfg.graphql_endpoint, "https://cm.local/sitecore/api/graph/edge");
}

#[test]
fn missing_credentials_errors() {
    let err = config_from(&[("SITECORE_API_KEY", "   ")]).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredentials));
}

#[test]
fn invalid_port_errors() {
    let err = config_from(&[("SITECORE_API_KEY", "k"), ("PORT", "http")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid PORT"));
}

#[test]
fn unparsable_timeouts_fall_back_to_defaults() {
    let cfg = config_from(&[("SITECORE_API_KEY", "k"), ("LAYOUT_REQUEST_TIMEOUT_SECS", "soon")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LAYOUT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn repeated_languages_are_listed_once() {
    let cfg = config_from(&[("SITECORE_API_KEY", "k"), ("SUPPORTED_LANGUAGES", "en,ar,EN, ar")]).unwrap();
    assert_eq!(cfg.languages, vec!["en", "ar"]);
}
