//! CMS Content Model
//!
//! Lenient representations of the CMS payloads. The CMS schema is not
//! owned by this site, so every field tolerates being missing, `null` or
//! of an unexpected type, and block payloads stay as raw JSON until a view mapper reads them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Shared `null` for lenient lookups that need a `&Value` fallback.
pub(crate) static NULL: Value = Value::Null;

/// Deserializes `null` as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A scalar rendered as text. Anything else (objects, arrays, `null`)
/// reads as absent.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserializes a string field, tolerating numbers and booleans. Values of
/// any other type become the empty string instead of failing the payload.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`lenient_string`], keeping the difference between absent and set.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Deserializes an array, dropping entries that do not decode. A value
/// that is not an array reads as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Response envelope shared by every CMS endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub data: T,
}

/// A tagged record within a page's `blocks` array.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Block {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

/// A CMS page: a slug/type and an ordered list of blocks.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Page {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub blocks: Vec<Block>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub meta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub meta_keywords: Option<String>,
}

impl Page {
    /// Payload of the first block of the given type.
    pub fn block(&self, kind: &str) -> Option<&Value> {
        self.blocks.iter().find(|b| b.kind == kind).map(|b| &b.data)
    }
}

/// Every page returned by the `pages` endpoint, in CMS order.
#[derive(Clone, Debug, Default)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Slug of the landing page.
    pub const HOMEPAGE: &'static str = "homepage";

    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find a page by slug, ignoring case and surrounding slashes.
    pub fn by_slug(&self, slug: &str) -> Option<&Page> {
        let wanted = slug.trim_matches('/');
        self.pages
            .iter()
            .find(|p| p.slug.trim_matches('/').eq_ignore_ascii_case(wanted))
    }

    /// Find a page whose type or slug equals `name`.
    pub fn by_type_or_slug(&self, name: &str) -> Option<&Page> {
        self.pages
            .iter()
            .find(|p| p.kind == name)
            .or_else(|| self.by_slug(name))
    }

    /// The landing page, if the CMS has one.
    pub fn homepage(&self) -> Option<&Page> {
        self.by_slug(Self::HOMEPAGE)
    }

    /// Payloads of every block of the given type, across all pages.
    pub fn blocks<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.pages
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter(move |b| b.kind == kind)
            .map(|b| &b.data)
    }
}

impl From<Vec<Page>> for PageSet {
    fn from(pages: Vec<Page>) -> Self {
        Self::new(pages)
    }
}

/// Site-wide header and footer configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub header: Value,
    #[serde(default)]
    pub footer: Value,
    /// Any other settings, kept for passthrough.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lenient field access on CMS JSON.
pub trait ValueExt {
    /// A string field, if present and not blank.
    fn text(&self, key: &str) -> Option<&str>;

    /// The first non-blank string among `keys`.
    fn first_text(&self, keys: &[&str]) -> Option<&str>;

    /// The first non-blank string among `keys`, or `default`.
    fn text_or(&self, keys: &[&str], default: &str) -> String {
        self.first_text(keys).unwrap_or(default).to_string()
    }

    /// An array field, or an empty slice.
    fn list(&self, key: &str) -> &[Value];

    /// A boolean that may arrive as a bool, a number or a string.
    fn flag(&self, key: &str) -> bool;

    /// An integer that may arrive as a number or a string.
    fn integer(&self, key: &str) -> Option<i64>;
}

impl ValueExt for Value {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str().filter(|s| !s.trim().is_empty())
    }

    fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.text(k))
    }

    fn list(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true" | "TRUE" | "yes"),
            _ => false,
        }
    }

    fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
