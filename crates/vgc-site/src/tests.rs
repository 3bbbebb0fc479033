//! Router tests against a stub CMS serving the vgc-cms fixtures.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use vgc_cms::views::PageMeta;
use vgc_cms::CmsConfig;

use crate::config::{SiteConfig, DEFAULT_BIND_ADDR, DEFAULT_SITE_NAME};
use crate::router::create_router;
use crate::state::AppState;
use crate::templates::Layout;
use crate::SiteError;

const PAGES_JSON: &str = include_str!("../../vgc-cms/fixtures/pages.json");
const SETTINGS_JSON: &str = include_str!("../../vgc-cms/fixtures/settings.json");
const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public");

async fn start_stub_cms() -> SocketAddr {
    let app = Router::new()
        .route(
            "/api/v1/pages",
            get(|| async { ([("content-type", "application/json")], PAGES_JSON) }),
        )
        .route(
            "/api/v1/settings",
            get(|| async { ([("content-type", "application/json")], SETTINGS_JSON) }),
        )
        .route("/api/v1/contact-form", post(contact_form))
        .route(
            "/no-settings/pages",
            get(|| async { ([("content-type", "application/json")], PAGES_JSON) }),
        )
        .route(
            "/no-settings/settings",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "settings offline") }),
        )
        .route("/odd/pages", get(|| async { Json(pages_with_odd_page()) }))
        .route(
            "/odd/settings",
            get(|| async { ([("content-type", "application/json")], SETTINGS_JSON) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub cms");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub cms");
    });
    addr
}

/// The fixture pages plus one whose metadata has the wrong shape.
fn pages_with_odd_page() -> Value {
    let mut payload: Value = serde_json::from_str(PAGES_JSON).expect("pages fixture");
    if let Some(pages) = payload["data"].as_array_mut() {
        pages.push(json!({ "slug": "privacy", "meta_keywords": ["privacy", "policy"], "blocks": [] }));
    }
    payload
}

async fn contact_form(Json(body): Json<Value>) -> Json<Value> {
    if body["name"] == "Spammer" {
        return Json(json!({ "success": false, "message": "Spam detected" }));
    }
    Json(json!({ "success": true, "message": "Thanks" }))
}

/// A port nothing listens on.
fn closed_port() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("address")
}

/// Site configuration against the stub endpoints under `prefix`.
fn site_config(cms_addr: SocketAddr, prefix: &str) -> SiteConfig {
    let cms = CmsConfig::new(format!("http://{cms_addr}/{prefix}")).with_timeout(Duration::from_millis(500));
    SiteConfig::new(closed_port(), cms).with_public_dir(PUBLIC_DIR)
}

fn router_for(config: SiteConfig) -> Router {
    create_router(AppState::new(config).expect("state"))
}

fn app_for(cms_addr: SocketAddr) -> Router {
    router_for(site_config(cms_addr, "api/v1"))
}

async fn app() -> Router {
    app_for(start_stub_cms().await)
}

async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
    send(app, request).await
}

async fn post_form(app: Router, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_home_renders_hero_and_chrome() {
    let (status, body) = get_page(app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Expert Financial Advice"));
    assert!(body.contains("Business Support"));
    assert!(body.contains("Closing the Books"));
    // Menu from settings, rewritten against the known pages.
    assert!(body.contains("Partner Portal"));
    assert!(body.contains("hello@vgc.test"));
}

#[tokio::test]
async fn test_about_page() {
    for path in ["/about-us", "/about"] {
        let (status, body) = get_page(app().await, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains("Who We Are"));
        assert!(body.contains("A Decade of Advice"));
        assert!(body.contains("Our Values"));
        assert!(body.contains("Asha Verma"));
    }
}

#[tokio::test]
async fn test_service_list() {
    let (status, body) = get_page(app().await, "/service").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tax Advisory"));
    assert!(body.contains("action=\"/service\""));
}

#[tokio::test]
async fn test_service_detail_offerings() {
    let (status, body) = get_page(app().await, "/service/business-support").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Accounting"));
    assert!(body.contains("Compliance"));
    assert!(body.contains("Bookkeeping"));
}

#[tokio::test]
async fn test_business_support_alias() {
    let (status, body) = get_page(app().await, "/business-support").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Bookkeeping"));
}

#[tokio::test]
async fn test_blog_list_and_post() {
    let app = app().await;

    let (status, body) = get_page(app.clone(), "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Audit Season"));
    assert!(body.contains("/blog/budget-2025"));

    let (status, body) = get_page(app, "/blog/BUDGET-2025").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>breakdown</strong>"));
}

#[tokio::test]
async fn test_career_lists_visible_jobs() {
    let (status, body) = get_page(app().await, "/career").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Junior Accountant"));
    assert!(!body.contains("Draft Role"));
    assert!(!body.contains("Unlisted Role"));
    assert!(body.contains("name=\"personal_note\""));
}

#[tokio::test]
async fn test_contact_page() {
    let app = app().await;
    for path in ["/contact-us", "/contact"] {
        let (status, body) = get_page(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains("Head Office"));
        assert!(body.contains("mailto:hello@vgc.test"));
    }
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    let app = app().await;
    for path in ["/service/nope", "/blog/nope", "/nope"] {
        let (status, body) = get_page(app.clone(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.contains("Page Not Found"));
    }
}

#[tokio::test]
async fn test_unreachable_cms_renders_unavailable() {
    let app = app_for(closed_port());

    let (status, body) = get_page(app.clone(), "/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("currently unavailable"));

    let (status, _) = get_page(app, "/about-us").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_settings_failure_keeps_pages_up() {
    let app = router_for(site_config(start_stub_cms().await, "no-settings"));

    let (status, body) = get_page(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Expert Financial Advice"));
    // Built-in navigation instead of the CMS menu.
    assert!(body.contains("href=\"/career\""));
    assert!(!body.contains("Partner Portal"));
}

#[tokio::test]
async fn test_malformed_page_does_not_take_the_site_down() {
    let app = router_for(site_config(start_stub_cms().await, "odd"));

    for path in ["/", "/blog", "/career", "/contact-us"] {
        let (status, _) = get_page(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_error_pages_use_configured_site_name() {
    let named = |addr| site_config(addr, "api/v1").with_site_name("VGC Advisors");

    let (status, body) = get_page(router_for(named(start_stub_cms().await)), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<title>Page Not Found | VGC Advisors</title>"));

    let (status, body) = get_page(router_for(named(closed_port())), "/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("<title>Temporarily Unavailable | VGC Advisors</title>"));
}

// ============================================================================
// Static assets
// ============================================================================

/// Every `/public/...` URL referenced by a rendered page, without the
/// cache-busting query.
fn local_assets(body: &str) -> Vec<String> {
    body.match_indices("/public/")
        .map(|(start, _)| {
            let rest = &body[start..];
            let end = rest.find(&['"', '\'', '?', ')', ' '][..]).unwrap_or(rest.len());
            rest[..end].to_string()
        })
        .collect()
}

#[tokio::test]
async fn test_built_in_assets_are_shipped() {
    let (status, _) = get_page(app().await, "/public/images/logo.svg").await;
    assert_eq!(status, StatusCode::OK);

    let app = app().await;
    let mut assets = Vec::new();
    for path in ["/", "/about-us", "/service", "/blog", "/career", "/contact-us", "/nope"] {
        let (_, body) = get_page(app.clone(), path).await;
        assets.extend(local_assets(&body));
    }
    assets.sort();
    assets.dedup();
    assert!(assets.iter().any(|a| a.ends_with("/fb.svg")));
    assert!(assets.iter().any(|a| a.ends_with("/avatar.svg")));

    for asset in assets {
        let (status, _) = get_page(app.clone(), &asset).await;
        assert_eq!(status, StatusCode::OK, "{asset}");
    }
}

// ============================================================================
// API
// ============================================================================

#[tokio::test]
async fn test_api_config_is_never_cached() {
    let request = Request::builder().uri("/api/config").body(Body::empty()).expect("request");
    let response = app().await.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["footer"]["email"], "hello@vgc.test");
}

#[tokio::test]
async fn test_api_config_reports_failure() {
    let request = Request::builder().uri("/api/config").body(Body::empty()).expect("request");
    let response = app_for(closed_port()).oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );
}

// ============================================================================
// Forms
// ============================================================================

#[tokio::test]
async fn test_contact_form_success() {
    let (status, body) = post_form(
        app().await,
        "/contact-us",
        "name=Jane&email=jane%40example.com&message=Hello+there",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("notice-success"));
    assert!(body.contains("Thank you"));
}

#[tokio::test]
async fn test_contact_form_invalid() {
    let (status, body) = post_form(app().await, "/contact-us", "name=&email=&message=Hi").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("notice-error"));
    assert!(body.contains("name is required"));
}

#[tokio::test]
async fn test_consultation_rejected_by_cms() {
    let (status, body) = post_form(
        app().await,
        "/service",
        "name=Spammer&phone=12345&service=Tax+Advisory&message=Buy+now",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Spam detected"));
}

#[tokio::test]
async fn test_career_application() {
    let (status, body) = post_form(
        app().await,
        "/career",
        "first_name=Ravi&last_name=Kumar&email=ravi%40example.com&position=Junior+Accountant",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("notice-success"));
}

#[tokio::test]
async fn test_form_post_with_cms_down() {
    let (status, body) = post_form(
        app_for(closed_port()),
        "/contact-us",
        "name=Jane&email=jane%40example.com&message=Hello",
    )
    .await;

    // The page itself needs the CMS, so the failed send surfaces as 503.
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("currently unavailable"));
}

// ============================================================================
// Config and layout
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = SiteConfig::from_lookup(|_| None).expect("config");

    assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    assert_eq!(config.cms.timeout, Duration::from_millis(7000));
}

#[test]
fn test_config_overrides() {
    let config = SiteConfig::from_lookup(|name| match name {
        "VGC_BIND_ADDR" => Some("0.0.0.0:8080".to_string()),
        "VGC_CMS_API_BASE" => Some("http://cms.test/api/v1".to_string()),
        "VGC_CMS_TIMEOUT_MS" => Some("250".to_string()),
        "VGC_SITE_NAME" => Some("  ".to_string()),
        "VGC_PUBLIC_DIR" => Some("/srv/public".to_string()),
        _ => None,
    })
    .expect("config");

    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.cms.api_base, "http://cms.test/api/v1");
    assert_eq!(config.cms.timeout, Duration::from_millis(250));
    assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    assert_eq!(config.public_dir.to_str(), Some("/srv/public"));
}

#[test]
fn test_config_rejects_bad_values() {
    let bad_addr = SiteConfig::from_lookup(|name| (name == "VGC_BIND_ADDR").then(|| "localhost".to_string()));
    assert!(matches!(bad_addr, Err(SiteError::Config(_))));

    let bad_ttl = SiteConfig::from_lookup(|name| (name == "VGC_CACHE_TTL_SECS").then(|| "soon".to_string()));
    assert!(matches!(bad_ttl, Err(SiteError::Config(msg)) if msg.contains("VGC_CACHE_TTL_SECS")));
}

#[test]
fn test_layout_title() {
    let titled = |title: &str| Layout::fallback(PageMeta::titled(title), DEFAULT_SITE_NAME).title();

    assert_eq!(titled("Blog"), "Blog | VGC Consulting");
    assert_eq!(titled("VGC Consulting | Home"), "VGC Consulting | Home");
    assert_eq!(titled("   "), "VGC Consulting");
}

#[cfg(debug_assertions)]
#[test]
fn test_livereload_ignores_generated_files() {
    use std::path::Path;

    use crate::dev_tools::triggers_reload;

    assert!(triggers_reload(Path::new("public/css/style.css")));
    assert!(triggers_reload(Path::new("templates/home.html")));
    assert!(!triggers_reload(Path::new("public/css/style.min.css")));
    assert!(!triggers_reload(Path::new("templates/.home.html.swp")));
    assert!(!triggers_reload(Path::new("templates/home.html~")));
}
