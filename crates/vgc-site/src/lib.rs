//! VGC Consulting Website Library
//!
//! Core library for the VGC Consulting marketing website. Pages are
//! rendered on each request from content held in the CMS; see `vgc_cms`
//! for the fetch layer and the view models.

pub mod config;
#[cfg(debug_assertions)]
pub mod dev_tools;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;

use tokio::net::TcpListener;
use tracing::info;

pub use crate::config::SiteConfig;
pub use crate::error::{SiteError, SiteResult};
use crate::{router::create_router, state::AppState};

/// Run the website server until Ctrl+C.
pub async fn run(config: SiteConfig) -> SiteResult<()> {
    let addr = config.bind_addr;
    info!(cms = %config.cms.api_base, "Using CMS");
    let state = AppState::new(config)?;

    #[cfg(debug_assertions)]
    let state = {
        let state_with_reloader = state.with_reloader();
        dev_tools::spawn_file_watcher(state_with_reloader.clone());
        state_with_reloader
    };

    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
