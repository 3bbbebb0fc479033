//! About page.

use serde::Serialize;
use serde_json::Value;

use super::{breadcrumb, Crumb, CtaSection, PageMeta};
use crate::html::split_paragraphs;
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt, NULL};

const ABOUT_BANNER: &str = "/public/images/about-banner.svg";
const ABOUT_IMAGE: &str = "/public/images/about-img.svg";
const BELIEFS_IMAGE: &str = "/public/images/about-img1.svg";

/// A heading, a few paragraphs and an image beside them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextWithImage {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    /// Image on the left instead of the right.
    pub reverse: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub image: String,
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub meta: PageMeta,
    pub title: String,
    pub banner_image: String,
    pub breadcrumb: Vec<Crumb>,
    pub about: TextWithImage,
    pub why_title: String,
    pub why_subtitle: String,
    pub features: Vec<Feature>,
    pub beliefs: TextWithImage,
    pub team_title: String,
    pub team: Vec<TeamMember>,
    pub global_presence: TextWithImage,
    pub cta: CtaSection,
}

/// Maps the page with type or slug `about`, or `None` if the CMS has none.
pub fn map(pages: &PageSet, media: &MediaResolver) -> Option<AboutView> {
    let page = pages.by_type_or_slug("about")?;
    let block = |kind: &str| page.block(kind).unwrap_or(&NULL);

    let banner_block = block("banner_slider_section");
    let banner = banner_block.list("banners").first().unwrap_or(&NULL);
    let title = banner.text_or(&["title"], "About Us");

    let about = block("about_section");
    let why = block("why_choose_us_section");
    let believe = block("what_we_believe_section");
    let team = block("team_section");
    let global = block("global_presence_section");

    Some(AboutView {
        meta: PageMeta::for_page(Some(page), "About Us"),
        banner_image: media.or_local(
            banner.text("image").or_else(|| banner_block.text("image")),
            ABOUT_BANNER,
        ),
        breadcrumb: breadcrumb(&[("Home", "/"), (title.as_str(), "#")]),
        title,
        about: TextWithImage {
            title: about.text_or(&["left_heading", "heading"], "About Us"),
            paragraphs: paragraphs(about, &["left_description", "description"]),
            image: media.or_local(about.text("right_image"), ABOUT_IMAGE),
            cta_text: None,
            cta_link: None,
            reverse: false,
        },
        why_title: why.text_or(&["heading"], "Why Choose"),
        why_subtitle: why.text_or(&["subtext"], "VGC Advisors"),
        features: why
            .list("items")
            .iter()
            .map(|item| Feature {
                icon: media.ensure_url(item.text("icon")),
                title: item.text_or(&["title"], ""),
                description: item.text_or(&["description"], ""),
            })
            .collect(),
        beliefs: TextWithImage {
            title: believe.text_or(&["right_title"], "What We Believe In"),
            paragraphs: paragraphs(believe, &["right_description"]),
            image: media.or_local(believe.first_text(&["left_image", "right_image"]), BELIEFS_IMAGE),
            cta_text: believe.text("right_cta_text").map(str::to_string),
            cta_link: believe.text("right_cta_link").map(str::to_string),
            reverse: true,
        },
        team_title: team.text_or(&["title", "heading"], "Our Team"),
        team: team
            .list("members")
            .iter()
            .map(|m| TeamMember {
                name: m.text_or(&["name"], ""),
                image: media.ensure_url(m.first_text(&["photo", "image"])),
                bio: m.text_or(&["description", "bio"], ""),
            })
            .collect(),
        global_presence: TextWithImage {
            title: global.text_or(&["left_title"], "Global Presence"),
            paragraphs: paragraphs(global, &["left_description"]),
            image: media.or_local(global.text("right_image"), ABOUT_IMAGE),
            cta_text: None,
            cta_link: None,
            reverse: false,
        },
        cta: CtaSection::from_block(
            page.block("cta_section"),
            CtaSection {
                top_heading: "Get Started Today!".into(),
                main_heading: "Let's Build Your Business Success Story, Together".into(),
                subtext: String::new(),
                cta_link: "tel:+1234567891".into(),
                cta_text: "Contact Us Today".into(),
            },
        ),
    })
}

fn paragraphs(data: &Value, keys: &[&str]) -> Vec<String> {
    data.first_text(keys).map(split_paragraphs).unwrap_or_default()
}
