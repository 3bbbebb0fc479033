//! HTML fragment utilities.
//!
//! CMS rich-text fields arrive as HTML fragments produced by an editor.
//! These helpers pull plain text, paragraphs, list items and titled
//! sections out of them. They are deliberately forgiving regex scans, not
//! an HTML parser: the fragments are small and editor-generated.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid regex")
});

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p>").expect("valid regex"));

static LIST_ITEM_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<li(?:\s[^>]*)?>\s*<p(?:\s[^>]*)?>(.*?)</p>\s*</li>").expect("valid regex")
});

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li(?:\s[^>]*)?>(.*?)</li>").expect("valid regex"));

static H5: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h5(?:\s[^>]*)?>(.*?)</h5>").expect("valid regex"));

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2(?:\s[^>]*)?>\s*<strong(?:\s[^>]*)?>(.*?)</strong>\s*</h2>")
        .expect("valid regex")
});

static SECTION_SUBTITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h3(?:\s[^>]*)?>\s*<strong(?:\s[^>]*)?>(.*?)</strong>\s*</h3>")
        .expect("valid regex")
});

static TITLED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<li(?:\s[^>]*)?>\s*<p(?:\s[^>]*)?>\s*<strong(?:\s[^>]*)?>(.*?)</strong>(.*?)</p>\s*</li>",
    )
    .expect("valid regex")
});

const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsible",
    "responsibility",
    "task",
    "duty",
    "handle",
    "manage",
    "coordinate",
];

const IDEAL_KEYWORDS: &[&str] = &[
    "ideal",
    "candidate",
    "qualification",
    "requirement",
    "skill",
    "experience",
];

/// Plain-text lines shorter than this are treated as noise by [`parse_html_list`].
const MIN_LINE_ITEM_CHARS: usize = 10;

/// Remove tags, decode entities and trim.
pub fn strip_html(html: &str) -> String {
    decode_entities(&TAG.replace_all(html, "")).trim().to_string()
}

/// Decode the named and numeric entities editors commonly emit.
///
/// Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ndash" => "–",
        "mdash" => "—",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "hellip" => "…",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        _ => return None,
    };
    Some(decoded.to_string())
}

/// Split plain text on blank lines into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    BLANK_LINES
        .split(&text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Paragraphs of an HTML fragment: its `<p>` blocks, or blank-line
/// separated text when it has none.
pub fn html_paragraphs(html: &str) -> Vec<String> {
    let paragraphs: Vec<String> = PARAGRAPH
        .captures_iter(html)
        .map(|caps| strip_html(&caps[1]))
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        split_paragraphs(&strip_html(html))
    } else {
        paragraphs
    }
}

/// List items of an HTML fragment.
///
/// Tries `<li><p>..</p></li>` first, then bare `<li>..</li>`, then falls
/// back to substantial plain-text lines.
pub fn parse_html_list(html: &str) -> Vec<String> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let items = captured_items(&LIST_ITEM_PARAGRAPH, html);
    if !items.is_empty() {
        return items;
    }

    let items = captured_items(&LIST_ITEM, html);
    if !items.is_empty() {
        return items;
    }

    html.split(['\n', '\r'])
        .map(strip_html)
        .filter(|line| line.chars().count() > MIN_LINE_ITEM_CHARS)
        .collect()
}

fn captured_items(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html)
        .map(|caps| strip_html(&caps[1]))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Bullet lists extracted from a job posting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDescription {
    pub responsibilities: Vec<String>,
    pub ideal_for: Vec<String>,
}

/// Split a job's long description into responsibilities and "ideal for"
/// bullets.
pub fn parse_job_description(html: &str) -> JobDescription {
    let mut job = JobDescription::default();
    if html.trim().is_empty() {
        return job;
    }

    let headings: Vec<_> = H5.captures_iter(html).collect();
    if !headings.is_empty() {
        for (i, caps) in headings.iter().enumerate() {
            let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let end = headings
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(html.len(), |m| m.start());
            let items = parse_html_list(&html[whole.end()..end]);

            let title = strip_html(title.as_str()).to_lowercase();
            if title.contains("responsibilit") {
                job.responsibilities.extend(items);
            } else if title.contains("ideal") {
                job.ideal_for.extend(items);
            }
        }
        return job;
    }

    let items = parse_html_list(html);
    if items.is_empty() {
        return job;
    }

    let mentions = |keywords: &[&str]| {
        items.iter().any(|item| {
            let item = item.to_lowercase();
            keywords.iter().any(|k| item.contains(k))
        })
    };
    let has_responsibility = mentions(RESPONSIBILITY_KEYWORDS);
    let has_ideal = mentions(IDEAL_KEYWORDS);

    if has_responsibility || (!has_ideal && items.len() > 2) {
        job.responsibilities = items;
    } else if has_ideal {
        job.ideal_for = items;
    } else {
        job.responsibilities = items;
    }
    job
}

/// A bullet with a bold lead-in, e.g. `<strong>Payroll</strong> – monthly runs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TitledItem {
    pub title: String,
    pub description: String,
}

/// A `<h2><strong>` section of a rich-text description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlSection {
    pub title: String,
    pub subtitle: Option<String>,
    pub items: Vec<TitledItem>,
}

/// Split a rich-text description into its `<h2><strong>` sections.
pub fn extract_sections(html: &str) -> Vec<HtmlSection> {
    let headings: Vec<_> = SECTION_HEADING.captures_iter(html).collect();

    headings
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let end = headings
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(html.len(), |m| m.start());
            let body = &html[whole.end()..end];

            let subtitle = SECTION_SUBTITLE
                .captures(body)
                .map(|c| strip_html(&c[1]))
                .filter(|s| !s.is_empty());

            let items = TITLED_ITEM
                .captures_iter(body)
                .map(|c| TitledItem {
                    title: strip_html(&c[1]),
                    description: strip_html(&c[2])
                        .trim_start_matches(|ch: char| ch.is_whitespace() || matches!(ch, '-' | '–' | '—'))
                        .to_string(),
                })
                .filter(|item| !item.title.is_empty())
                .collect();

            Some(HtmlSection {
                title: strip_html(&caps[1]),
                subtitle,
                items,
            })
        })
        .collect()
}

/// Subtitle of the single offering built when a description has no sections.
pub const DEFAULT_OFFERING_SUBTITLE: &str = "Our Services";

/// A block of work listed on a service detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Offering {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub items: Vec<TitledItem>,
}

/// Offerings of a service, one per `<h2><strong>` section of its long
/// description. The short description is attached to the first offering
/// only. A description without sections yields a single offering named
/// after the service, described by the short description or, failing
/// that, the stripped long description.
pub fn extract_offerings(html: &str, service_title: &str, short_description: &str) -> Vec<Offering> {
    let sections = extract_sections(html);
    if sections.is_empty() {
        return vec![Offering {
            title: service_title.to_string(),
            subtitle: DEFAULT_OFFERING_SUBTITLE.to_string(),
            description: if short_description.is_empty() {
                strip_html(html)
            } else {
                short_description.to_string()
            },
            items: Vec::new(),
        }];
    }

    sections
        .into_iter()
        .enumerate()
        .map(|(i, section)| Offering {
            title: section.title,
            subtitle: section.subtitle.unwrap_or_default(),
            description: if i == 0 { short_description.to_string() } else { String::new() },
            items: section.items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags_and_trims() {
        assert_eq!(strip_html("  <p>Hello <b>world</b></p>\n"), "Hello world");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(strip_html("<p>Tax &amp; Audit&nbsp;&ndash; &#8377;5</p>"), "Tax & Audit – ₹5");
        assert_eq!(decode_entities("&#x41;&unknown;"), "A&unknown;");
    }

    #[test]
    fn test_split_paragraphs() {
        let text = "First line\ncontinues\n\n\nSecond\r\n\r\n   \n\nThird  ";
        assert_eq!(
            split_paragraphs(text),
            vec!["First line\ncontinues", "Second", "Third"]
        );
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_html_paragraphs_prefers_p_blocks() {
        let html = "<p>One</p><p> </p><p class=\"x\">Two &amp; more</p>";
        assert_eq!(html_paragraphs(html), vec!["One", "Two & more"]);
        assert_eq!(html_paragraphs("Plain\n\ntext"), vec!["Plain", "text"]);
    }

    #[test]
    fn test_parse_html_list_variants() {
        let nested = "<ul><li><p>Prepare <em>returns</em></p></li><li><p>File GST</p></li></ul>";
        assert_eq!(parse_html_list(nested), vec!["Prepare returns", "File GST"]);

        let bare = "<ul><li>Audit</li><li> </li><li>Payroll</li></ul>";
        assert_eq!(parse_html_list(bare), vec!["Audit", "Payroll"]);

        let lines = "Short\nA much longer line of text\n<br>";
        assert_eq!(parse_html_list(lines), vec!["A much longer line of text"]);
    }

    #[test]
    fn test_job_description_with_headings() {
        let html = r"
<h5>Responsibilities</h5>
<ul>
<li><p>Responsible for developing and maintaining web applications</p></li>
<li><p>Work with outside data sources and APIs</p></li>
</ul>
<h5><strong>Ideal For</strong></h5>
<ul>
<li><p>2+ years of experience in web development</p></li>
</ul>
";
        let job = parse_job_description(html);
        assert_eq!(job.responsibilities.len(), 2);
        assert_eq!(job.ideal_for, vec!["2+ years of experience in web development"]);
    }

    #[test]
    fn test_job_description_keyword_heuristics() {
        let ideal = "<ul><li>Candidate with CA qualification</li></ul>";
        assert_eq!(parse_job_description(ideal).ideal_for.len(), 1);

        let duties = "<ul><li>Manage client books</li><li>Candidate must travel</li></ul>";
        let job = parse_job_description(duties);
        assert_eq!(job.responsibilities.len(), 2);
        assert!(job.ideal_for.is_empty());

        let neutral = "<ul><li>Alpha</li><li>Beta</li></ul>";
        assert_eq!(parse_job_description(neutral).responsibilities.len(), 2);

        assert_eq!(parse_job_description("  "), JobDescription::default());
    }

    #[test]
    fn test_extract_sections() {
        let html = concat!(
            "<h2><strong>Accounting</strong></h2>",
            "<h3><strong>For growing firms</strong></h3>",
            "<ul><li><p><strong>Bookkeeping</strong> – monthly ledgers</p></li>",
            "<li><p><strong>Payroll</strong>- salary runs</p></li></ul>",
            "<h2> <strong>Compliance</strong> </h2>",
            "<ul><li><p><strong>GST</strong> returns</p></li></ul>",
        );
        let sections = extract_sections(html);
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].title, "Accounting");
        assert_eq!(sections[0].subtitle.as_deref(), Some("For growing firms"));
        assert_eq!(
            sections[0].items,
            vec![
                TitledItem { title: "Bookkeeping".into(), description: "monthly ledgers".into() },
                TitledItem { title: "Payroll".into(), description: "salary runs".into() },
            ]
        );

        assert_eq!(sections[1].title, "Compliance");
        assert_eq!(sections[1].subtitle, None);
        assert_eq!(sections[1].items[0].description, "returns");
    }

    #[test]
    fn test_extract_sections_without_headings() {
        assert!(extract_sections("<p>No structure here</p>").is_empty());
    }

    #[test]
    fn test_offerings_carry_short_description_on_first_only() {
        let html = "<h2><strong>A</strong></h2><h2><strong>B</strong></h2>";
        let offerings = extract_offerings(html, "Tax", "Short");
        assert_eq!(offerings.len(), 2);
        assert_eq!(offerings[0].description, "Short");
        assert_eq!(offerings[1].description, "");
    }

    #[test]
    fn test_offerings_fallback_to_service_title() {
        let offerings = extract_offerings("<p>Plain</p>", "Business Support", "We help.");
        assert_eq!(extract_offerings("<p>Plain</p>", "Tax", "")[0].description, "Plain");
        assert_eq!(
            offerings,
            vec![Offering {
                title: "Business Support".into(),
                subtitle: DEFAULT_OFFERING_SUBTITLE.into(),
                description: "We help.".into(),
                items: vec![],
            }]
        );
    }
}
