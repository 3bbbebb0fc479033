//! Blog list and blog post pages.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use super::{breadcrumb, Crumb, PageMeta};
use crate::dates::display_date;
use crate::html::strip_html;
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt};

const BLOG_BANNER: &str = "/public/images/blog-banner.svg";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogCard {
    pub slug: String,
    pub date: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub link: String,
}

pub fn blog_card(value: &Value, media: &MediaResolver) -> BlogCard {
    let slug = value.text_or(&["slug"], "");
    BlogCard {
        date: display_date(value.first_text(&["created_at", "published_at"])),
        title: value.text_or(&["title"], ""),
        excerpt: strip_html(value.text("short_description").unwrap_or("")),
        image: media.ensure_url(value.first_text(&["featured_image", "cover_image"])),
        link: if slug.is_empty() { "/blog".to_string() } else { format!("/blog/{slug}") },
        slug,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogListView {
    pub meta: PageMeta,
    pub title: String,
    pub banner_image: String,
    pub breadcrumb: Vec<Crumb>,
    pub posts: Vec<BlogCard>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogPostView {
    pub meta: PageMeta,
    pub card: BlogCard,
    /// Rich-text body from the CMS, rendered unescaped.
    pub content_html: String,
}

/// Every post across all `blog_section` blocks, first occurrence wins.
/// Posts without a slug are kept; they cannot collide.
fn raw_posts(pages: &PageSet) -> Vec<&Value> {
    let mut seen = HashSet::new();
    pages
        .blocks("blog_section")
        .flat_map(|block| block.list("blogs"))
        .filter(|post| match post.text("slug") {
            Some(slug) => seen.insert(slug.to_ascii_lowercase()),
            None => true,
        })
        .collect()
}

pub fn list(pages: &PageSet, media: &MediaResolver) -> BlogListView {
    let page = pages.by_type_or_slug("blog");
    BlogListView {
        meta: PageMeta::for_page(page, "Blog"),
        title: page
            .map(|p| p.title.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or("Blog")
            .to_string(),
        banner_image: BLOG_BANNER.to_string(),
        breadcrumb: breadcrumb(&[("Home", "/"), ("Blog", "#")]),
        posts: raw_posts(pages).into_iter().map(|p| blog_card(p, media)).collect(),
    }
}

/// Maps the post with `slug`, or `None` if no blog section lists it.
pub fn post(pages: &PageSet, slug: &str, media: &MediaResolver) -> Option<BlogPostView> {
    let raw = raw_posts(pages)
        .into_iter()
        .find(|p| p.text("slug").is_some_and(|s| s.eq_ignore_ascii_case(slug)))?;
    let card = blog_card(raw, media);

    Some(BlogPostView {
        meta: PageMeta {
            title: raw.text_or(&["meta_title"], &card.title),
            description: raw.text_or(&["meta_description"], &card.excerpt),
            keywords: raw.text_or(&["meta_keywords"], ""),
        },
        content_html: raw
            .first_text(&["long_description", "content", "short_description"])
            .unwrap_or("")
            .to_string(),
        card,
    })
}
