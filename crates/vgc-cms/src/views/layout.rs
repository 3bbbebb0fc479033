//! Header and footer shared by every page.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::media::MediaResolver;
use crate::model::{PageSet, Settings, ValueExt};
use crate::routing::{rewrite_nav, NavItem};

const DEFAULT_LOGO: &str = "/public/images/logo.svg";
const DEFAULT_PHONE: &str = "+123 456 789 100";
const DEFAULT_EMAIL: &str = "hi@vgc@gmail.com";
const DEFAULT_COPYRIGHT: &str = "Copyright © 2025. All rights reserved.";
const DEFAULT_BLURB: &str = "Don't let finance and tax problems hold you back. At VGC Advisors, \
we are committed to empowering your business with expert financial advice and tailored \
solutions. Contact us today to learn how we can help you thrive.";
const DEFAULT_COMPANY: &str = "VGC Consulting Opt.";

/// Icons for social links without one of their own, by position.
const SOCIAL_ICONS: &[&str] = &["fb.svg", "pint.svg", "link.svg", "ins.svg", "tw.svg"];
const DEFAULT_SOCIAL_COUNT: usize = 5;

const HEADER_NAV_KEYS: &[&str] = &["menu", "navigation", "nav_items", "menu_items", "items"];
const FOOTER_NAV_KEYS: &[&str] = &["navigation", "menu", "links", "nav_items"];
const SOCIAL_KEYS: &[&str] = &["social_links", "social", "socials"];

fn default_header_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About Us", "/about-us"),
        NavItem::new("Services", "/service"),
        NavItem::new("Blog", "/blog"),
        NavItem::new("Career", "/career"),
    ]
}

fn default_footer_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About Us", "/about-us"),
        NavItem::new("Careers", "/career"),
        NavItem::new("Services", "/service"),
        NavItem::new("Blogs", "/blog"),
    ]
}

/// A footer social icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub url: String,
    pub icon: String,
    pub label: String,
}

/// Footer content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub blurb: String,
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub social: Vec<SocialLink>,
    pub nav: Vec<NavItem>,
    pub company: String,
    pub copyright: String,
}

/// Header and footer content for every page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteChrome {
    pub logo: String,
    pub nav: Vec<NavItem>,
    pub contact: NavItem,
    pub footer: FooterView,
}

impl SiteChrome {
    /// Builds the chrome from CMS settings, rewriting menu entries against
    /// the known pages. Anything missing falls back to the built-in menu and
    /// footer copy.
    pub fn build(settings: Option<&Settings>, pages: Option<&PageSet>, media: &MediaResolver) -> Self {
        let null = Value::Null;
        let header = settings.map_or(&null, |s| &s.header);
        let footer = settings.map_or(&null, |s| &s.footer);

        let mut nav = nav_items(header, HEADER_NAV_KEYS).unwrap_or_else(default_header_nav);
        let mut footer_nav = nav_items(footer, FOOTER_NAV_KEYS).unwrap_or_else(default_footer_nav);
        if let Some(pages) = pages {
            nav = rewrite_nav(&nav, pages, &[]);
            footer_nav = rewrite_nav(&footer_nav, pages, &[]);
        }

        let phone = footer.text_or(&["phone", "contact_phone", "phone_number"], DEFAULT_PHONE);
        let email = footer.text_or(&["email", "contact_email"], DEFAULT_EMAIL);

        Self {
            logo: media.or_local(header.first_text(&["logo", "logo_image"]), DEFAULT_LOGO),
            nav,
            contact: NavItem::new(
                header.text_or(&["cta_text", "contact_text"], "Contact Us"),
                header.text_or(&["cta_link", "contact_link"], "/contact-us"),
            ),
            footer: FooterView {
                blurb: footer.text_or(&["description", "about", "text"], DEFAULT_BLURB),
                phone_href: phone_href(&phone),
                phone,
                email,
                social: social_links(footer, media),
                nav: footer_nav,
                company: footer.text_or(&["company", "company_name"], DEFAULT_COMPANY),
                copyright: footer.text_or(&["copyright", "copyright_text"], DEFAULT_COPYRIGHT),
            },
        }
    }
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self::build(None, None, &MediaResolver::default())
    }
}

/// Menu entries under the first present key, sorted by `order`.
fn nav_items(section: &Value, keys: &[&str]) -> Option<Vec<NavItem>> {
    let raw = keys.iter().map(|k| section.list(k)).find(|l| !l.is_empty())?;
    let mut items: Vec<NavItem> = raw.iter().filter_map(NavItem::from_value).collect();
    if items.is_empty() {
        debug!("CMS menu has no usable entries, using built-in navigation");
        return None;
    }
    items.sort_by_key(|item| item.order);
    Some(items)
}

/// `tel:` link for a display phone number.
pub fn phone_href(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return phone_href(DEFAULT_PHONE);
    }
    if trimmed.starts_with("tel:") {
        return trimmed.to_string();
    }
    let digits: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

fn social_links(footer: &Value, media: &MediaResolver) -> Vec<SocialLink> {
    let raw = SOCIAL_KEYS
        .iter()
        .map(|k| footer.list(k))
        .find(|l| !l.is_empty())
        .unwrap_or(&[]);

    let mut links: Vec<SocialLink> = raw
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (url, icon) = match entry {
                Value::String(url) => (url.trim().to_string(), None),
                other => (
                    other.text_or(&["url", "link", "href"], ""),
                    media.resolve(other.first_text(&["icon", "image"])),
                ),
            };
            let label = entry
                .first_text(&["platform", "name", "label"])
                .map_or_else(|| format!("Social {}", i + 1), str::to_string);
            SocialLink {
                url: if url.is_empty() { "#".to_string() } else { url },
                icon: icon.unwrap_or_else(|| default_social_icon(i)),
                label,
            }
        })
        .collect();

    if links.is_empty() {
        links = (0..DEFAULT_SOCIAL_COUNT)
            .map(|i| SocialLink {
                url: "#".to_string(),
                icon: default_social_icon(i),
                label: format!("Social {}", i + 1),
            })
            .collect();
    }
    links
}

fn default_social_icon(index: usize) -> String {
    format!("/public/images/{}", SOCIAL_ICONS.get(index).unwrap_or(&"link.svg"))
}
