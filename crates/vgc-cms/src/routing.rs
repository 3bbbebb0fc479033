//! Navigation rewriting.
//!
//! Menu items configured in the CMS point at CMS URLs and labels, which do
//! not always match the site's routes. Each internal item is matched to a
//! CMS page and pointed at that page's path.

use serde::Serialize;
use serde_json::Value;

use crate::model::{Page, PageSet, ValueExt};

/// Common URL/label spellings and the page slug they usually mean.
const HEURISTICS: &[(&str, &str)] = &[
    ("about-us", "about"),
    ("our-services", "service"),
    ("contact-us", "contact"),
    ("blogs", "blog"),
    ("home", "homepage"),
];

/// A header or footer menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub url: String,
    pub is_external: bool,
    pub order: i64,
}

impl NavItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            is_external: false,
            order: 0,
        }
    }

    /// Reads a menu entry from CMS settings. Entries without a label are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let label = value.first_text(&["label", "title", "name"])?.trim().to_string();
        let url = value.text_or(&["url", "link", "href", "slug"], "");
        let is_external = value.flag("is_external")
            || value.flag("external")
            || value.text("target") == Some("_blank");

        Some(Self {
            label,
            url,
            is_external,
            order: value.integer("order").unwrap_or(0),
        })
    }

    /// True if the item leaves the site.
    pub fn leaves_site(&self) -> bool {
        self.is_external || crate::media::is_absolute(&self.url)
    }
}

/// Remove backslashes and surrounding whitespace and slashes.
fn trim_slashes(s: &str) -> String {
    s.replace('\\', "")
        .trim_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

/// Site path of a CMS page.
pub fn page_path(slug: &str) -> String {
    let slug = trim_slashes(slug);
    if slug.is_empty() || slug == PageSet::HOMEPAGE {
        "/".to_string()
    } else {
        format!("/{slug}")
    }
}

/// Normalize a label for comparison: `"Tax & Audit"` → `"tax and audit"`.
pub fn normalize_label(label: &str) -> String {
    let lowered = label.to_lowercase().replace('&', "and");
    lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize an internal URL into a root-relative site path.
pub fn normalize_internal(raw: &str) -> String {
    let path = trim_slashes(raw);
    if path.is_empty() || path.eq_ignore_ascii_case("home") {
        "/".to_string()
    } else {
        format!("/{path}")
    }
}

fn page_by_slug_key<'a>(pages: &'a PageSet, key: &str) -> Option<&'a Page> {
    pages
        .pages()
        .iter()
        .find(|p| !p.slug.is_empty() && trim_slashes(&p.slug.to_lowercase()) == key)
}

/// Find the CMS page a menu entry refers to.
///
/// Tried in order: an alias of the URL path, the URL path as a slug, the
/// homepage for `home` or an empty path, the label as a page title, and
/// finally [`HEURISTICS`] on the path or label.
pub fn match_page_for_nav<'a>(
    item: &NavItem,
    pages: &'a PageSet,
    aliases: &[(&str, &str)],
) -> Option<&'a Page> {
    let path = trim_slashes(&item.url).to_lowercase();

    if let Some((_, alias)) = aliases.iter().find(|(from, _)| *from == path) {
        if let Some(page) = page_by_slug_key(pages, alias) {
            return Some(page);
        }
    }

    if let Some(page) = page_by_slug_key(pages, &path) {
        return Some(page);
    }

    if path.is_empty() || path == "home" {
        if let Some(home) = pages.homepage() {
            return Some(home);
        }
    }

    let label_key = normalize_label(&item.label);
    if let Some(page) = pages
        .pages()
        .iter()
        .find(|p| !p.title.is_empty() && normalize_label(&p.title) == label_key)
    {
        return Some(page);
    }

    HEURISTICS
        .iter()
        .find(|(from, _)| *from == path)
        .or_else(|| HEURISTICS.iter().find(|(from, _)| *from == label_key))
        .and_then(|(_, slug)| page_by_slug_key(pages, slug))
}

/// Point every internal menu entry at a site path.
pub fn rewrite_nav(items: &[NavItem], pages: &PageSet, aliases: &[(&str, &str)]) -> Vec<NavItem> {
    items
        .iter()
        .map(|item| {
            if item.leaves_site() {
                return item.clone();
            }
            let url = match match_page_for_nav(item, pages, aliases) {
                Some(page) => page_path(&page.slug),
                None => normalize_internal(&item.url),
            };
            NavItem { url, ..item.clone() }
        })
        .collect()
}
