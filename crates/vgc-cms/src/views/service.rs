//! Service list and service detail pages.
//!
//! Services are not pages of their own: they live in the homepage's
//! `services_section` block, and a detail page is looked up there by slug.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{breadcrumb, Crumb, PageMeta};
use crate::html::{extract_offerings, html_paragraphs, strip_html, Offering};
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt, NULL};

const SERVICE_BANNER: &str = "/public/images/service-banner.svg";

/// A service as listed on the landing and service pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub slug: String,
    pub desc: String,
    pub paragraphs: Vec<String>,
    pub link: String,
    pub image: String,
}

pub fn service_card(value: &Value, media: &MediaResolver) -> ServiceCard {
    let slug = value.text_or(&["slug"], "");
    let link = if slug.is_empty() {
        value.text_or(&["link", "url"], "/service")
    } else {
        format!("/service/{slug}")
    };
    let summary = value.first_text(&["short_description", "long_description"]).unwrap_or("");

    ServiceCard {
        title: value.text_or(&["title", "name"], ""),
        desc: strip_html(summary),
        paragraphs: value
            .text("short_description")
            .map(html_paragraphs)
            .unwrap_or_default(),
        link,
        slug,
        image: media.ensure_url(value.first_text(&["featured_image", "mobile_featured_image", "image"])),
    }
}

/// Heading block of a service page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceBanner {
    pub title: String,
    pub description: String,
    pub image: String,
    pub breadcrumb: Vec<Crumb>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceListView {
    pub meta: PageMeta,
    pub banner: ServiceBanner,
    pub form_title: String,
    pub form_description: String,
    pub services_title: String,
    pub services: Vec<ServiceCard>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceDetailView {
    pub meta: PageMeta,
    pub slug: String,
    pub banner: ServiceBanner,
    pub offerings: Vec<Offering>,
}

/// Raw service records from the homepage, or from any `services_section`
/// if the homepage has none.
fn raw_services(pages: &PageSet) -> &[Value] {
    pages
        .homepage()
        .and_then(|home| home.block("services_section"))
        .or_else(|| pages.blocks("services_section").next())
        .map_or(&[][..], |block| block.list("services"))
}

/// Maps the service list. Copy comes from a page of type or slug
/// `service` when the CMS has one.
pub fn list(pages: &PageSet, media: &MediaResolver) -> ServiceListView {
    let page = pages.by_type_or_slug("service");
    let banner = page
        .and_then(|p| p.block("banner_slider_section"))
        .and_then(|b| b.list("banners").first())
        .unwrap_or(&NULL);
    let section = pages
        .homepage()
        .and_then(|home| home.block("services_section"))
        .unwrap_or(&NULL);

    ServiceListView {
        meta: PageMeta::for_page(page, "Our Services"),
        banner: ServiceBanner {
            title: banner.text_or(&["title"], "Our Services"),
            description: strip_html(banner.first_text(&["subtitle", "description"]).unwrap_or("")),
            image: media.or_local(banner.text("image"), SERVICE_BANNER),
            breadcrumb: breadcrumb(&[("Home", "/"), ("Services", "#")]),
        },
        form_title: "Request a Consultation".to_string(),
        form_description: "Tell us what your business needs and our advisors will get back to you."
            .to_string(),
        services_title: section.text_or(&["title", "heading"], "What We Offer"),
        services: raw_services(pages).iter().map(|s| service_card(s, media)).collect(),
    }
}

/// Maps the detail page of the service with `slug`, or `None` if no such
/// service exists.
pub fn detail(pages: &PageSet, slug: &str, media: &MediaResolver) -> Option<ServiceDetailView> {
    let Some(service) = raw_services(pages)
        .iter()
        .find(|s| s.text("slug").is_some_and(|s| s.eq_ignore_ascii_case(slug)))
    else {
        debug!(slug, "no service with this slug");
        return None;
    };

    let title = service.text_or(&["title", "name"], "");
    let short = strip_html(service.text("short_description").unwrap_or(""));
    let long = service.text("long_description").unwrap_or("");

    let meta = PageMeta {
        title: service.text_or(&["meta_title"], &title),
        description: service.text_or(&["meta_description"], &short),
        keywords: service.text_or(&["meta_keywords"], ""),
    };

    Some(ServiceDetailView {
        meta,
        slug: slug.to_string(),
        offerings: extract_offerings(long, &title, &short),
        banner: ServiceBanner {
            breadcrumb: breadcrumb(&[("Home", "/"), ("Services", "/service"), (title.as_str(), "#")]),
            image: media.or_local(
                service.first_text(&["featured_image", "mobile_featured_image"]),
                SERVICE_BANNER,
            ),
            description: short,
            title,
        },
    })
}

/// Slugs of every service with one.
pub fn slugs(pages: &PageSet) -> Vec<String> {
    raw_services(pages)
        .iter()
        .filter_map(|s| s.text("slug"))
        .map(str::to_string)
        .collect()
}
