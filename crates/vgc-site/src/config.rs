//! Site Configuration
//!
//! Settings are read from `VGC_*` environment variables, each with a
//! default that works for local development against the production CMS.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use vgc_cms::config::{DEFAULT_API_BASE, DEFAULT_STORAGE_BASE};
use vgc_cms::CmsConfig;

use crate::error::{SiteError, SiteResult};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_SITE_NAME: &str = "VGC Consulting";
const DEFAULT_TIMEOUT_MS: u64 = 7000;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// CMS client settings.
    pub cms: CmsConfig,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
    /// Appended to page titles.
    pub site_name: String,
}

impl SiteConfig {
    /// Creates a configuration with default settings.
    pub fn new(bind_addr: SocketAddr, cms: CmsConfig) -> Self {
        Self {
            bind_addr,
            cms,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }

    /// Sets the static file directory.
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Sets the site name.
    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = var("VGC_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| SiteError::Config(format!("VGC_BIND_ADDR '{bind}': {e}")))?;

        let number = |name: &str, default: u64| -> SiteResult<u64> {
            match var(name) {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| SiteError::Config(format!("{name} '{raw}': {e}"))),
                None => Ok(default),
            }
        };

        let cms = CmsConfig::new(var("VGC_CMS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
            .with_storage_base(var("VGC_STORAGE_BASE").unwrap_or_else(|| DEFAULT_STORAGE_BASE.to_string()))
            .with_timeout(Duration::from_millis(number("VGC_CMS_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?))
            .with_cache_ttl(Duration::from_secs(number("VGC_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?));

        let mut config = Self::new(bind_addr, cms);
        if let Some(dir) = var("VGC_PUBLIC_DIR") {
            config = config.with_public_dir(dir);
        }
        if let Some(name) = var("VGC_SITE_NAME") {
            config = config.with_site_name(name);
        }
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(
            SocketAddr::from(([127, 0, 0, 1], 3000)),
            CmsConfig::default(),
        )
    }
}
