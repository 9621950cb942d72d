//! Shared layout model and Layout Service envelope parsing.
//!
//! This crate owns the JSON shape delivered by the CMS Layout Service and is
//! used by both the site server and the `cli` validator. A parsed layout is
//! immutable for the duration of a render; nothing here performs I/O.

pub mod field;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use field::{Content, Field, Fields, ImageValue, Item, LinkValue};

/// GraphQL query executed against the Layout Service for one route.
pub const LAYOUT_QUERY: &str = "query LayoutQuery($path: String!, $language: String!, $site: String!) {
  layout(site: $site, routePath: $path, language: $language) {
    item {
      rendered
    }
  }
}";

/// Rendering parameters of a component instance.
pub type Params = BTreeMap<String, String>;

/// Root placeholders of a page, in document order.
pub const ROOT_PLACEHOLDERS: [&str; 3] = ["headless-header", "headless-main", "headless-footer"];

/// Named slots, each holding an ordered list of component instances.
pub type Placeholders = BTreeMap<String, Vec<LayoutNode>>;

/// Error returned by [`parse_layout_response`].
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The body is not a GraphQL response of the expected shape.
    #[error("failed to parse layout response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The service answered with a GraphQL `errors` array.
    #[error("layout service returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

// =============================================================================
// LAYOUT TREE
// =============================================================================

/// A component instance inside a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    /// Rendering name used for registry lookup. Empty for nodes the CMS
    /// emits without one; those degrade like unknown components.
    #[serde(default, deserialize_with = "null_as_default")]
    pub component_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default, deserialize_with = "string_params")]
    pub params: Params,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placeholders: Placeholders,
}

impl LayoutNode {
    /// Shorthand constructor used by fixtures.
    #[must_use]
    pub fn named(component_name: impl Into<String>) -> Self {
        Self { component_name: component_name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, name: impl Into<String>, nodes: Vec<LayoutNode>) -> Self {
        self.placeholders.insert(name.into(), nodes);
        self
    }
}

/// The page item resolved for a route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub item_language: Option<String>,
    #[serde(default)]
    pub template_name: Option<String>,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placeholders: Placeholders,
}

impl RouteData {
    /// Root placeholders in page order, followed by any others by name.
    pub fn root_placeholders(&self) -> impl Iterator<Item = (&str, &[LayoutNode])> {
        let known = ROOT_PLACEHOLDERS
            .iter()
            .filter_map(|name| self.placeholders.get_key_value(*name));
        let rest = self
            .placeholders
            .iter()
            .filter(|(name, _)| !ROOT_PLACEHOLDERS.contains(&name.as_str()));
        known.chain(rest).map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Every component instance, depth first, in page order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        for (_, nodes) in self.root_placeholders() {
            collect_nodes(nodes, &mut out);
        }
        out
    }
}

fn collect_nodes<'a>(nodes: &'a [LayoutNode], out: &mut Vec<&'a LayoutNode>) {
    for node in nodes {
        out.push(node);
        for children in node.placeholders.values() {
            collect_nodes(children, out);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Request-level context delivered alongside the route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContext {
    #[serde(default)]
    pub page_editing: bool,
    #[serde(default)]
    pub site: Option<SiteInfo>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub item_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SitecoreData {
    #[serde(default)]
    pub context: LayoutContext,
    #[serde(default)]
    pub route: Option<RouteData>,
}

/// The `rendered` payload of the layout query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutData {
    pub sitecore: SitecoreData,
}

impl LayoutData {
    #[must_use]
    pub fn route(&self) -> Option<&RouteData> {
        self.sitecore.route.as_ref()
    }

    /// Context language, falling back to the route item language.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.sitecore
            .context
            .language
            .as_deref()
            .or_else(|| self.route().and_then(|r| r.item_language.as_deref()))
    }
}

/// Treats an explicit JSON `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_params<'de, D>(deserializer: D) -> Result<Params, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

// =============================================================================
// GRAPHQL ENVELOPE
// =============================================================================

/// Variables of [`LAYOUT_QUERY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRequest {
    #[serde(rename = "path")]
    pub route_path: String,
    pub language: String,
    pub site: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a LayoutRequest,
}

/// JSON body posted to the GraphQL endpoint.
#[must_use]
pub fn layout_request_body(request: &LayoutRequest) -> Value {
    serde_json::to_value(GraphQlRequest { query: LAYOUT_QUERY, variables: request }).unwrap_or(Value::Null)
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct EnvelopeData {
    layout: Option<LayoutField>,
}

#[derive(Deserialize)]
struct LayoutField {
    item: Option<LayoutItem>,
}

#[derive(Deserialize)]
struct LayoutItem {
    rendered: Option<LayoutData>,
}

#[derive(Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// Parse a Layout Service response body.
///
/// Returns `Ok(None)` when the service resolved no item or no route for the
/// requested path.
///
/// # Errors
///
/// Returns [`EnvelopeError::Parse`] for malformed bodies and
/// [`EnvelopeError::GraphQl`] when the response carries GraphQL errors.
pub fn parse_layout_response(json: &str) -> Result<Option<LayoutData>, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if !envelope.errors.is_empty() {
        return Err(EnvelopeError::GraphQl(envelope.errors.into_iter().map(|e| e.message).collect()));
    }

    Ok(envelope
        .data
        .and_then(|data| data.layout)
        .and_then(|layout| layout.item)
        .and_then(|item| item.rendered)
        .filter(|layout| layout.sitecore.route.is_some()))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
