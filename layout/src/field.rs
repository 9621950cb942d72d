//! Field model — typed views over CMS-authored content values.
//!
//! The Layout Service does not tag field types. Values arrive as
//! `{ "value": ... }` objects (or arrays for list fields) and are classified
//! by shape when deserialized. Every field may be absent or empty, so the
//! typed accessors on [`Fields`] only return non-empty values.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

// =============================================================================
// VALUES
// =============================================================================

/// Image field value. Dimensions are optional; the CMS sends them as either
/// numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageValue {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// General link field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkValue {
    pub href: String,
    pub text: String,
    /// `None` when the CMS sends no target or an empty one.
    pub target: Option<String>,
}

/// A referenced item in a list field (multilist, treelist, droplink).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub fields: Fields,
}

/// A single CMS field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Single-line or multi-line plain text.
    Text(String),
    /// Authored HTML markup, emitted without escaping.
    RichText(String),
    Image(ImageValue),
    Link(LinkValue),
    /// Items referenced by a list field.
    Items(Vec<Item>),
    /// Any value with no recognised shape (checkbox booleans, nulls).
    Other(Value),
}

impl Field {
    /// Classify a raw Layout Service field value.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        match raw {
            Value::Array(items) => Self::Items(items.into_iter().filter_map(item_from_value).collect()),
            Value::Object(mut obj) => match obj.remove("value") {
                Some(value) => classify_value(value),
                None if obj.contains_key("fields") => {
                    Self::Items(item_from_value(Value::Object(obj)).into_iter().collect())
                }
                None => Self::Other(Value::Object(obj)),
            },
            other => Self::Other(other),
        }
    }

    /// `true` when the field carries nothing worth rendering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::RichText(s) => s.trim().is_empty(),
            Self::Image(image) => image.src.is_empty(),
            Self::Link(link) => link.href.is_empty(),
            Self::Items(items) => items.is_empty(),
            Self::Other(Value::Object(obj)) => obj.is_empty(),
            Self::Other(Value::String(s)) => s.is_empty(),
            Self::Other(value) => value.is_null(),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn classify_value(value: Value) -> Field {
    match value {
        Value::String(s) if looks_like_markup(&s) => Field::RichText(s),
        Value::String(s) => Field::Text(s),
        Value::Number(n) => Field::Text(n.to_string()),
        Value::Object(obj) if obj.contains_key("src") => Field::Image(image_from_map(&obj)),
        Value::Object(obj) if obj.contains_key("href") => Field::Link(link_from_map(&obj)),
        other => Field::Other(other),
    }
}

/// Rich text values always open with a tag; plain text never does.
fn looks_like_markup(s: &str) -> bool {
    s.trim_start().starts_with('<')
}

fn item_from_value(value: Value) -> Option<Item> {
    serde_json::from_value(value).ok()
}

fn string_of(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn dimension_of(map: &Map<String, Value>, key: &str) -> Option<u32> {
    match map.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn image_from_map(map: &Map<String, Value>) -> ImageValue {
    ImageValue {
        src: string_of(map, "src"),
        alt: string_of(map, "alt"),
        width: dimension_of(map, "width"),
        height: dimension_of(map, "height"),
    }
}

fn link_from_map(map: &Map<String, Value>) -> LinkValue {
    let target = string_of(map, "target");
    LinkValue {
        href: string_of(map, "href"),
        text: string_of(map, "text"),
        target: (!target.is_empty()).then_some(target),
    }
}

/// Body of a text-like field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// Authored markup, written verbatim.
    Markup(&'a str),
    /// Plain text, escaped on output.
    Plain(&'a str),
}

// =============================================================================
// FIELD SET
// =============================================================================

/// Named fields of a component instance, route, or referenced item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, Field>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, field: Field) -> Self {
        self.0.insert(name.into(), field);
        self
    }

    /// Raw field lookup, including empty values.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    /// Non-empty text of a text or rich text field. Callers escape it.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Field::Text(s) | Field::RichText(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Non-empty body of a text or rich text field, tagged with whether it
    /// is trusted markup or plain text that still needs escaping.
    #[must_use]
    pub fn content(&self, name: &str) -> Option<Content<'_>> {
        match self.get(name)? {
            Field::RichText(s) if !s.trim().is_empty() => Some(Content::Markup(s)),
            Field::Text(s) if !s.trim().is_empty() => Some(Content::Plain(s)),
            _ => None,
        }
    }

    #[must_use]
    pub fn image(&self, name: &str) -> Option<&ImageValue> {
        match self.get(name)? {
            Field::Image(image) if !image.src.is_empty() => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn link(&self, name: &str) -> Option<&LinkValue> {
        match self.get(name)? {
            Field::Link(link) if !link.href.is_empty() => Some(link),
            _ => None,
        }
    }

    /// Items of a list field; empty when absent.
    #[must_use]
    pub fn items(&self, name: &str) -> &[Item] {
        match self.get(name) {
            Some(Field::Items(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// `true` when no field carries a renderable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Field::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Field)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Field)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(raw
            .map(|map| {
                map.into_iter()
                    .map(|(name, value)| (name, Field::from_value(value)))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod tests;
