//! Landing page.

use serde::Serialize;
use serde_json::Value;

use super::blog::{blog_card, BlogCard};
use super::layout::phone_href;
use super::service::{service_card, ServiceCard};
use super::{phone_from_link, CtaSection, PageMeta};
use crate::error::{CmsError, CmsResult};
use crate::html::split_paragraphs;
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt, NULL};

const DEFAULT_AVATAR: &str = "/public/images/avatar.svg";
const MAX_STARS: i64 = 5;
const DEFAULT_CTA_LINK: &str = "/contact-us";
const DEFAULT_CTA_TEXT: &str = "Contact Us Today";

/// The banner carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub phone: String,
    pub phone_href: String,
    pub banners: Vec<String>,
}

/// A headline figure such as "90% Client Retention Rate".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub value: String,
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    pub title: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientsSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ClientLogo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub avatar: String,
    pub stars: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestimonialsSection {
    pub left_text: String,
    pub right_text: String,
    pub right_subtext: String,
    pub items: Vec<Testimonial>,
}

/// Everything the landing page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub meta: PageMeta,
    pub hero: Hero,
    pub counters: Vec<Counter>,
    pub services: Vec<ServiceCard>,
    pub blog: Vec<BlogCard>,
    pub clients: ClientsSection,
    pub testimonials: TestimonialsSection,
    pub cta: CtaSection,
}

/// Maps the `homepage` page.
///
/// Unlike the inner pages, the landing page has no sensible fallback, so
/// a missing homepage is an error.
pub fn map(pages: &PageSet, media: &MediaResolver) -> CmsResult<HomeView> {
    let page = pages
        .homepage()
        .ok_or_else(|| CmsError::MissingPage(PageSet::HOMEPAGE.to_string()))?;

    let hero = hero(page.block("banner_slider_section"), media);

    let services_block = page.block("services_section");
    let services = services_block
        .map(|b| b.list("services").iter().map(|s| service_card(s, media)).collect())
        .unwrap_or_default();

    let blog = page
        .block("blog_section")
        .map(|b| b.list("blogs").iter().map(|p| blog_card(p, media)).collect())
        .unwrap_or_default();

    let (cta_link, cta_text) = call_link(&hero);
    let cta = CtaSection::from_block(
        page.block("cta_section"),
        CtaSection {
            top_heading: "Get Started Today!".into(),
            main_heading: "Ready to Take Your Business to the Next Level?".into(),
            subtext: "Don't let finance and tax problems hold you back. At VGC Advisors, we are \
                      committed to empowering your business with expert financial advice and \
                      tailored solutions. Contact us today to learn how we can help you thrive."
                .into(),
            cta_link,
            cta_text,
        },
    );

    Ok(HomeView {
        meta: PageMeta::for_page(Some(page), "VGC Consulting"),
        counters: counters(services_block),
        services,
        blog,
        clients: clients(page.block("clients_logo_section"), media),
        testimonials: testimonials(page.block("testimonials_section"), media),
        cta,
        hero,
    })
}

/// The CTA button: a call when the banner carries a phone number, the
/// contact page otherwise.
fn call_link(hero: &Hero) -> (String, String) {
    if hero.phone_href.is_empty() {
        (DEFAULT_CTA_LINK.to_string(), DEFAULT_CTA_TEXT.to_string())
    } else {
        (hero.phone_href.clone(), format!("Make a Call {}", hero.phone))
    }
}

fn hero(block: Option<&Value>, media: &MediaResolver) -> Hero {
    let banners = block.map_or(&[][..], |b| b.list("banners"));
    let first = banners.first().unwrap_or(&NULL);

    let phone = first
        .text("cta_link")
        .filter(|link| link.trim_start().starts_with("tel:"))
        .map(phone_from_link)
        .unwrap_or_default();

    Hero {
        title: first.text_or(&["title"], ""),
        paragraphs: first.text("subtitle").map(split_paragraphs).unwrap_or_default(),
        phone_href: if phone.is_empty() { String::new() } else { phone_href(&phone) },
        phone,
        banners: banners
            .iter()
            .filter_map(|b| media.resolve(b.text("image")))
            .collect(),
    }
}

fn counters(services_block: Option<&Value>) -> Vec<Counter> {
    let configured: Vec<Counter> = services_block
        .map(|b| b.list("counters"))
        .unwrap_or(&[])
        .iter()
        .filter_map(|c| {
            Some(Counter {
                value: c.first_text(&["value", "count"])?.to_string(),
                suffix: c.text_or(&["suffix"], ""),
                label: c.text_or(&["label", "title"], ""),
            })
        })
        .collect();

    if !configured.is_empty() {
        return configured;
    }

    [
        ("15", "%", "Revenue Growth Rate"),
        ("90", "%", "Client Retention Rate"),
        ("12", "+", "Years in Operation"),
    ]
    .into_iter()
    .map(|(value, suffix, label)| Counter {
        value: value.into(),
        suffix: suffix.into(),
        label: label.into(),
    })
    .collect()
}

fn clients(block: Option<&Value>, media: &MediaResolver) -> ClientsSection {
    let data = block.unwrap_or(&NULL);
    ClientsSection {
        title: data.text_or(&["title"], "Our Clients"),
        subtitle: data.text_or(&["subtitle"], ""),
        items: data
            .list("logos")
            .iter()
            .map(|c| ClientLogo {
                title: c.text_or(&["title"], ""),
                icon: media.ensure_url(c.text("logo")),
            })
            .collect(),
    }
}

fn testimonials(block: Option<&Value>, media: &MediaResolver) -> TestimonialsSection {
    let data = block.unwrap_or(&NULL);
    TestimonialsSection {
        left_text: data.text_or(&["left_text"], "Building Trust Through Results"),
        right_text: data.text_or(&["right_text"], "Testimonials"),
        right_subtext: data.text_or(&["right_subtext"], "Client Success Stories: Hear What They Say"),
        items: data
            .list("items")
            .iter()
            .map(|t| {
                let rating = t.integer("rating").unwrap_or(MAX_STARS).clamp(0, MAX_STARS);
                Testimonial {
                    text: t.text_or(&["quote", "text"], ""),
                    author: t.text_or(&["author", "item_author", "name"], ""),
                    avatar: media.or_local(t.text("avatar"), DEFAULT_AVATAR),
                    stars: "★".repeat(rating as usize),
                }
            })
            .collect(),
    }
}
