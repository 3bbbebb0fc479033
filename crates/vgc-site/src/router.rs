//! Router Configuration
//!
//! Route configuration for the website.

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{error, handlers, state::AppState};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The ?v= query parameter provides cache busting when files change.
    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new(&state.config().public_dir));

    let router = Router::new()
        .route("/", get(handlers::home::home))
        .route("/about-us", get(handlers::about::about))
        .route("/about", get(handlers::about::about))
        .route(
            "/service",
            get(handlers::service::service_index).post(handlers::service::service_request),
        )
        .route("/service/{slug}", get(handlers::service::service_detail))
        .route("/business-support", get(handlers::service::business_support))
        .route("/blog", get(handlers::blog::blog_index))
        .route("/blog/{slug}", get(handlers::blog::blog_post))
        .route(
            "/career",
            get(handlers::career::career_page).post(handlers::career::career_apply),
        )
        .route(
            "/contact-us",
            get(handlers::contact::contact_page).post(handlers::contact::contact_submit),
        )
        // Menu entries matched to the CMS `contact` page resolve here.
        .route("/contact", get(handlers::contact::contact_page))
        .route("/api/config", get(handlers::api::config))
        .nest_service("/public", static_service)
        .fallback(handlers::not_found);

    #[cfg(debug_assertions)]
    let router = router.route("/__livereload", get(crate::dev_tools::livereload_handler));

    router
        .layer(from_fn_with_state(state.clone(), error::brand_error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
