//! Site configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling
//! [`SiteConfig::from_env`]. Parsing goes through a key lookup closure so
//! tests can feed a map instead of mutating the process environment.

use std::path::PathBuf;

pub const DEFAULT_EDGE_URL: &str = "https://edge-platform.sitecorecloud.io";
pub const DEFAULT_SITE_NAME: &str = "plus-five-hundred-US";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_LAYOUT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LAYOUT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

const GRAPHQL_PATH: &str = "/v1/content/api/graphql/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing layout service credentials: set SITECORE_EDGE_CONTEXT_ID or SITECORE_API_KEY")]
    MissingCredentials,
    #[error("config parse failed: {0}")]
    Parse(String),
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "E_MISSING_CREDENTIALS",
            Self::Parse(_) => "E_CONFIG_PARSE",
        }
    }
}

/// How requests to the Layout Service authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeAuth {
    /// Sent as the `sitecoreContextId` query parameter.
    ContextId(String),
    /// Sent as the `sc_apikey` header.
    ApiKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub graphql_endpoint: String,
    pub auth: EdgeAuth,
    pub site_name: String,
    pub default_language: String,
    /// Lowercased language codes accepted as a leading path segment.
    /// Always contains `default_language`.
    pub languages: Vec<String>,
    /// Shared secret expected on editing requests. Editing is refused when unset.
    pub editing_secret: Option<String>,
    pub timeouts: LayoutTimeouts,
    pub public_dir: PathBuf,
    pub port: u16,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Required (one of):
    /// - `SITECORE_EDGE_CONTEXT_ID`
    /// - `SITECORE_API_KEY`
    ///
    /// Optional:
    /// - `SITECORE_EDGE_URL`: default `https://edge-platform.sitecorecloud.io`
    /// - `GRAPH_QL_ENDPOINT`: overrides the endpoint derived from the edge URL
    /// - `SITECORE_SITE_NAME`: default `plus-five-hundred-US`
    /// - `DEFAULT_LANGUAGE`: default `en`
    /// - `SUPPORTED_LANGUAGES`: comma-separated language codes
    /// - `SITECORE_EDITING_SECRET`
    /// - `LAYOUT_REQUEST_TIMEOUT_SECS`: default 10
    /// - `LAYOUT_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PUBLIC_DIR`: default `public`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let auth = match (var("SITECORE_EDGE_CONTEXT_ID"), var("SITECORE_API_KEY")) {
            (Some(context_id), _) => EdgeAuth::ContextId(context_id),
            (None, Some(api_key)) => EdgeAuth::ApiKey(api_key),
            (None, None) => return Err(ConfigError::MissingCredentials),
        };

        let graphql_endpoint = var("GRAPH_QL_ENDPOINT").unwrap_or_else(|| {
            let edge = var("SITECORE_EDGE_URL").unwrap_or_else(|| DEFAULT_EDGE_URL.to_owned());
            format!("{}{GRAPHQL_PATH}", edge.trim_end_matches('/'))
        });

        let default_language = var("DEFAULT_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
            .to_ascii_lowercase();
        let languages = parse_languages(var("SUPPORTED_LANGUAGES").as_deref(), &default_language);

        let timeouts = LayoutTimeouts {
            request_secs: parse_u64(var("LAYOUT_REQUEST_TIMEOUT_SECS"), DEFAULT_LAYOUT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(var("LAYOUT_CONNECT_TIMEOUT_SECS"), DEFAULT_LAYOUT_CONNECT_TIMEOUT_SECS),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            graphql_endpoint,
            auth,
            site_name: var("SITECORE_SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
            default_language,
            languages,
            editing_secret: var("SITECORE_EDITING_SECRET"),
            timeouts,
            public_dir: PathBuf::from(var("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_owned())),
            port,
        })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

fn parse_languages(raw: Option<&str>, default_language: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for code in raw.unwrap_or_default().split(',') {
        let code = code.trim().to_ascii_lowercase();
        if !code.is_empty() && !languages.contains(&code) {
            languages.push(code);
        }
    }
    if !languages.iter().any(|code| code == default_language) {
        languages.insert(0, default_language.to_owned());
    }
    languages
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
