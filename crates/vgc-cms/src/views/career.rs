//! Career page.

use serde::Serialize;
use serde_json::Value;

use super::{breadcrumb, Crumb, PageMeta};
use crate::dates::parse_date;
use crate::html::{parse_html_list, parse_job_description, strip_html};
use crate::media::MediaResolver;
use crate::model::{PageSet, ValueExt, NULL};

const CAREER_BANNER: &str = "/public/images/career-banner.svg";

/// Job statuses that keep a posting off the page.
const HIDDEN_STATUSES: &[&str] = &["inactive", "draft", "closed", "0"];

/// A titled bullet list such as "Why Work With Us".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BulletList {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CareerButton {
    pub text: String,
    pub link: String,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobOpening {
    pub title: String,
    pub slug: String,
    pub responsibilities: Vec<String>,
    pub ideal_for: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CareerView {
    pub meta: PageMeta,
    pub title: String,
    pub description: String,
    pub image: String,
    pub breadcrumb: Vec<Crumb>,
    pub form_title: String,
    pub form_subtitle: String,
    pub left: Vec<BulletList>,
    pub right: Vec<BulletList>,
    pub openings_title: String,
    pub jobs: Vec<JobOpening>,
    pub cta_title: String,
    pub buttons: Vec<CareerButton>,
}

pub fn map(pages: &PageSet, media: &MediaResolver) -> CareerView {
    let page = pages.by_type_or_slug("career");
    let block = |kind: &str| page.and_then(|p| p.block(kind)).unwrap_or(&NULL);
    let header = block("career_header");
    let section = block("career_section");

    let title = header.text_or(&["left_title", "title"], "Career");

    CareerView {
        meta: PageMeta::for_page(page, "Career"),
        description: strip_html(header.first_text(&["left_description", "description"]).unwrap_or("")),
        image: media.or_local(header.first_text(&["right_image_main", "image"]), CAREER_BANNER),
        breadcrumb: breadcrumb(&[("Home", "/"), ("Career", "#")]),
        title,
        form_title: "Join Our Team".to_string(),
        form_subtitle: section.text_or(&["main_text", "form_title"], "Apply Now"),
        left: bullet_lists(section.list("left_section")),
        right: bullet_lists(section.list("right_section")),
        openings_title: section.text_or(&["jobs_title"], "Current Openings"),
        jobs: jobs(section),
        cta_title: section.text_or(&["cta_title"], ""),
        buttons: section
            .list("buttons")
            .iter()
            .filter_map(|b| {
                Some(CareerButton {
                    text: b.first_text(&["text", "label"])?.to_string(),
                    link: b.text_or(&["link", "url"], "#"),
                    primary: b.text("type").map_or(true, |t| t == "primary"),
                })
            })
            .collect(),
    }
}

fn bullet_lists(raw: &[Value]) -> Vec<BulletList> {
    raw.iter()
        .map(|entry| BulletList {
            title: entry.text_or(&["title"], ""),
            items: parse_html_list(entry.text("description").unwrap_or("")),
        })
        .filter(|list| !list.title.is_empty() || !list.items.is_empty())
        .collect()
}

/// An id as a string, whether the CMS sent a number or a string.
fn id_string(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

fn is_visible(job: &Value) -> bool {
    job.text("status")
        .map_or(true, |status| !HIDDEN_STATUSES.contains(&status.trim().to_ascii_lowercase().as_str()))
}

/// Openings listed by a `career_section`: restricted to `jobs_ids` when
/// present, hidden statuses dropped, newest first if `show_jobs_latest`.
fn jobs(section: &Value) -> Vec<JobOpening> {
    let wanted: Vec<String> = section
        .list("jobs_ids")
        .iter()
        .filter_map(id_string)
        .collect();

    let mut selected: Vec<&Value> = section
        .list("jobs")
        .iter()
        .filter(|job| {
            wanted.is_empty()
                || job
                    .get("id")
                    .and_then(id_string)
                    .is_some_and(|id| wanted.contains(&id))
        })
        .filter(|job| is_visible(job))
        .collect();

    if section.flag("show_jobs_latest") {
        // Stable sort keeps CMS order among undated postings.
        selected.sort_by_key(|job| {
            std::cmp::Reverse(job.first_text(&["created_at", "updated_at"]).and_then(parse_date))
        });
    }

    selected
        .into_iter()
        .map(|job| {
            let parsed = parse_job_description(
                job.first_text(&["long_description", "description"]).unwrap_or(""),
            );
            JobOpening {
                title: job.text_or(&["title", "name"], ""),
                slug: job.text_or(&["slug"], ""),
                responsibilities: parsed.responsibilities,
                ideal_for: parsed.ideal_for,
            }
        })
        .collect()
}
