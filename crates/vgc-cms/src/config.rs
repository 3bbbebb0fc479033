//! CMS client configuration.

use std::time::Duration;

/// Default CMS API base.
pub const DEFAULT_API_BASE: &str = "https://vgc.psofttechnologies.in/api/v1";

/// Default base for CMS-hosted media.
pub const DEFAULT_STORAGE_BASE: &str = "https://vgc.psofttechnologies.in/storage/";

/// How long fetched content may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Content that changes through the CMS; reused for the dynamic TTL.
    Dynamic,
    /// Content that effectively never changes; reused for a year.
    Static,
    /// Always refetched.
    Never,
}

impl CachePolicy {
    /// One year, in seconds.
    pub const STATIC_TTL: Duration = Duration::from_secs(31_536_000);

    /// Returns the time-to-live for this policy, or `None` if nothing is cached.
    pub fn ttl(self, dynamic_ttl: Duration) -> Option<Duration> {
        match self {
            Self::Dynamic if dynamic_ttl.is_zero() => None,
            Self::Dynamic => Some(dynamic_ttl),
            Self::Static => Some(Self::STATIC_TTL),
            Self::Never => None,
        }
    }
}

/// CMS client configuration.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// API base, without a trailing slash (e.g. `https://host/api/v1`).
    pub api_base: String,
    /// Base URL that relative media paths are resolved against.
    pub storage_base: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// TTL for [`CachePolicy::Dynamic`] content.
    pub cache_ttl: Duration,
    /// Caching of the `pages` endpoint.
    pub pages_policy: CachePolicy,
    /// Caching of the `settings` endpoint.
    pub settings_policy: CachePolicy,
}

impl CmsConfig {
    /// Creates a configuration for the given API base with default timeouts.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Sets the media storage base.
    pub fn with_storage_base(mut self, base: impl Into<String>) -> Self {
        self.storage_base = base.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TTL for dynamic content.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the cache policy of the `pages` endpoint.
    pub fn with_pages_policy(mut self, policy: CachePolicy) -> Self {
        self.pages_policy = policy;
        self
    }

    /// Sets the cache policy of the `settings` endpoint.
    pub fn with_settings_policy(mut self, policy: CachePolicy) -> Self {
        self.settings_policy = policy;
        self
    }

    /// Full URL of an endpoint below the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            storage_base: DEFAULT_STORAGE_BASE.to_string(),
            timeout: Duration::from_millis(7000),
            cache_ttl: Duration::from_secs(300), // 5 minutes
            pages_policy: CachePolicy::Dynamic,
            settings_policy: CachePolicy::Never,
        }
    }
}
