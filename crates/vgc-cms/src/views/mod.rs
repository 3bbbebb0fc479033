//! Page View Models
//!
//! Mappers from CMS pages to the shapes the templates render. Each page
//! module reads the blocks it knows about and falls back to default copy
//! for anything the CMS leaves out.

pub mod about;
pub mod blog;
pub mod career;
pub mod contact;
pub mod home;
pub mod layout;
pub mod service;

use serde::Serialize;
use serde_json::Value;

use crate::model::{Page, ValueExt};

/// `<head>` metadata for a rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Metadata from a page's `meta_*` fields, defaulting the title.
    pub fn for_page(page: Option<&Page>, default_title: &str) -> Self {
        Self {
            title: meta_field(page.and_then(|p| p.meta_title.as_ref()))
                .unwrap_or_else(|| default_title.to_string()),
            description: meta_field(page.and_then(|p| p.meta_description.as_ref()))
                .unwrap_or_default(),
            keywords: meta_field(page.and_then(|p| p.meta_keywords.as_ref())).unwrap_or_default(),
        }
    }
}

fn meta_field(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// One step of a breadcrumb trail. The last step renders as plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Build a breadcrumb trail from `(label, href)` pairs.
pub fn breadcrumb<L: AsRef<str>, H: AsRef<str>>(steps: &[(L, H)]) -> Vec<Crumb> {
    steps
        .iter()
        .map(|(label, href)| Crumb {
            label: label.as_ref().to_string(),
            href: href.as_ref().to_string(),
        })
        .collect()
}

/// The "Get Started Today!" call-to-action strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CtaSection {
    pub top_heading: String,
    pub main_heading: String,
    pub subtext: String,
    pub cta_link: String,
    pub cta_text: String,
}

impl CtaSection {
    /// Reads a `cta_section` payload, keeping `defaults` for missing fields.
    pub fn from_block(data: Option<&Value>, defaults: CtaSection) -> Self {
        let Some(data) = data else {
            return defaults;
        };
        Self {
            top_heading: data.text_or(&["top_heading"], &defaults.top_heading),
            main_heading: data.text_or(&["main_heading"], &defaults.main_heading),
            subtext: data.text_or(&["subtext"], &defaults.subtext),
            cta_link: data.text_or(&["cta_link"], &defaults.cta_link),
            cta_text: data.text_or(&["cta_text"], &defaults.cta_text),
        }
    }
}

/// Phone number of a `tel:` link, for display.
pub(crate) fn phone_from_link(link: &str) -> String {
    link.trim().trim_start_matches("tel:").trim().to_string()
}
