//! Askama Templates
//!
//! Template structs for rendering HTML pages. Every page embeds a
//! [`Layout`] that `base.html` reads for the `<head>`, header and footer.

use askama::Template;
use askama_web::WebTemplate;
use vgc_cms::views::about::AboutView;
use vgc_cms::views::blog::{BlogListView, BlogPostView};
use vgc_cms::views::career::CareerView;
use vgc_cms::views::contact::ContactView;
use vgc_cms::views::home::HomeView;
use vgc_cms::views::layout::SiteChrome;
use vgc_cms::views::service::{ServiceDetailView, ServiceListView};
use vgc_cms::views::PageMeta;

use crate::state::AppState;

/// Appended to static asset URLs so browsers refetch after a deploy.
pub const ASSET_VERSION: &str = env!("BUILD_VERSION");

/// `style.min.css` in release builds when minification succeeded.
pub const STYLESHEET: &str = env!("STYLESHEET");

/// Shared page frame.
pub struct Layout {
    pub chrome: SiteChrome,
    pub meta: PageMeta,
    pub site_name: String,
    pub asset_version: &'static str,
    pub stylesheet: &'static str,
    pub livereload: bool,
}

impl Layout {
    pub fn new(state: &AppState, chrome: SiteChrome, meta: PageMeta) -> Self {
        Self {
            chrome,
            meta,
            site_name: state.config().site_name.clone(),
            asset_version: ASSET_VERSION,
            stylesheet: STYLESHEET,
            livereload: state.livereload(),
        }
    }

    /// Layout with the built-in header and footer, for error pages.
    pub fn fallback(meta: PageMeta, site_name: &str) -> Self {
        Self {
            chrome: SiteChrome::default(),
            meta,
            site_name: site_name.to_string(),
            asset_version: ASSET_VERSION,
            stylesheet: STYLESHEET,
            livereload: false,
        }
    }

    /// `<title>` text: the page title, suffixed with the site name unless
    /// it already mentions it.
    pub fn title(&self) -> String {
        let title = self.meta.title.trim();
        if title.is_empty() {
            self.site_name.clone()
        } else if title.contains(&self.site_name) {
            title.to_string()
        } else {
            format!("{title} | {}", self.site_name)
        }
    }
}

/// Outcome of a form post, shown above the form.
pub struct Notice {
    pub success: bool,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub view: HomeView,
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub view: AboutView,
}

/// Service list with the consultation request form.
#[derive(Template, WebTemplate)]
#[template(path = "service/index.html")]
pub struct ServiceListTemplate {
    pub layout: Layout,
    pub view: ServiceListView,
    pub notice: Option<Notice>,
}

#[derive(Template, WebTemplate)]
#[template(path = "service/detail.html")]
pub struct ServiceDetailTemplate {
    pub layout: Layout,
    pub view: ServiceDetailView,
}

/// Blog list page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogListTemplate {
    pub layout: Layout,
    pub view: BlogListView,
}

/// Individual blog post template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/post.html")]
pub struct BlogPostTemplate {
    pub layout: Layout,
    pub view: BlogPostView,
}

#[derive(Template, WebTemplate)]
#[template(path = "career.html")]
pub struct CareerTemplate {
    pub layout: Layout,
    pub view: CareerView,
    pub notice: Option<Notice>,
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub view: ContactView,
    pub notice: Option<Notice>,
}

/// Shown when the CMS cannot be reached.
#[derive(Template, WebTemplate)]
#[template(path = "unavailable.html")]
pub struct UnavailableTemplate {
    pub layout: Layout,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}
