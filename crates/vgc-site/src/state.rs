//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

#[cfg(debug_assertions)]
use tokio::sync::broadcast;
use tracing::warn;
use vgc_cms::views::layout::SiteChrome;
use vgc_cms::{CmsClient, PageSet};

use crate::config::SiteConfig;
use crate::error::SiteResult;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    cms: CmsClient,
    config: SiteConfig,
    #[cfg(debug_assertions)]
    reloader: Option<broadcast::Sender<()>>,
}

impl AppState {
    /// Create a new `AppState` without hot reload.
    pub fn new(config: SiteConfig) -> SiteResult<Self> {
        let cms = CmsClient::new(config.cms.clone())?;
        Ok(Self {
            inner: Arc::new(InnerState {
                cms,
                config,
                #[cfg(debug_assertions)]
                reloader: None,
            }),
        })
    }

    /// Create a new `AppState` with hot reload channel (debug only).
    #[cfg(debug_assertions)]
    pub fn with_reloader(self) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(InnerState {
                cms: self.inner.cms.clone(),
                config: self.inner.config.clone(),
                reloader: Some(tx),
            }),
        }
    }

    /// Get the CMS client.
    pub fn cms(&self) -> &CmsClient {
        &self.inner.cms
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Header and footer for a page. A settings failure only costs the
    /// CMS-configured menu, so it falls back to the built-in chrome.
    pub async fn chrome(&self, pages: Option<&PageSet>) -> SiteChrome {
        let settings = match self.cms().settings().await {
            Ok(settings) => Some(settings),
            Err(err) => {
                warn!(error = %err, "CMS settings unavailable, using built-in header and footer");
                None
            }
        };
        SiteChrome::build(settings.as_deref(), pages, self.cms().media())
    }

    /// Get the reloader channel (debug only).
    #[cfg(debug_assertions)]
    pub fn reloader(&self) -> Option<&broadcast::Sender<()>> {
        self.inner.reloader.as_ref()
    }

    /// True when pages should include the live reload script.
    pub fn livereload(&self) -> bool {
        #[cfg(debug_assertions)]
        {
            self.inner.reloader.is_some()
        }
        #[cfg(not(debug_assertions))]
        {
            false
        }
    }
}
