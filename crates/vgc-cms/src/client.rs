//! HTTP client for the CMS API.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CmsConfig;
use crate::error::{CmsError, CmsResult};
use crate::media::MediaResolver;
use crate::model::{Envelope, Page, PageSet, Settings};

/// Both endpoints return a single document, so each cache holds one entry.
const CACHE_KEY: &str = "all";

/// A visitor enquiry forwarded to the CMS `contact-form` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = non_blank(service.into());
        self
    }

    /// Checks that the submission can reach someone.
    pub fn validate(&self) -> CmsResult<()> {
        if self.name.trim().is_empty() {
            return Err(CmsError::Invalid("name is required".into()));
        }
        if self.message.trim().is_empty() {
            return Err(CmsError::Invalid("message is required".into()));
        }
        if self.email.is_none() && self.phone.is_none() {
            return Err(CmsError::Invalid("an email address or phone number is required".into()));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(CmsError::Invalid(format!("'{email}' is not an email address")));
            }
        }
        Ok(())
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Client for the CMS API.
///
/// Cheap to clone; clones share the HTTP connection pool and caches.
///
/// # Example
///
/// ```ignore
/// use vgc_cms::{CmsClient, CmsConfig};
///
/// let client = CmsClient::new(CmsConfig::default())?;
/// let pages = client.pages().await?;
/// let home = pages.homepage();
/// ```
#[derive(Clone)]
pub struct CmsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: CmsConfig,
    media: MediaResolver,
    pages: Option<Cache<&'static str, Arc<PageSet>>>,
    settings: Option<Cache<&'static str, Arc<Settings>>>,
}

fn single_entry_cache<V>(ttl: Duration) -> Cache<&'static str, V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder().max_capacity(1).time_to_live(ttl).build()
}

impl CmsClient {
    /// Creates a client from the configuration.
    pub fn new(config: CmsConfig) -> CmsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("vgc-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let pages = config.pages_policy.ttl(config.cache_ttl).map(single_entry_cache);
        let settings = config.settings_policy.ttl(config.cache_ttl).map(single_entry_cache);
        let media = MediaResolver::new(&config.storage_base);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                media,
                pages,
                settings,
            }),
        })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.inner.config
    }

    /// Resolver for media paths returned by this CMS.
    pub fn media(&self) -> &MediaResolver {
        &self.inner.media
    }

    /// Every CMS page.
    pub async fn pages(&self) -> CmsResult<Arc<PageSet>> {
        if let Some(cache) = &self.inner.pages {
            if let Some(cached) = cache.get(CACHE_KEY).await {
                return Ok(cached);
            }
        }

        let envelope: Envelope<Vec<Value>> = self.get_json("pages").await?;
        let pages: Vec<Page> = envelope
            .data
            .into_iter()
            .filter_map(|raw| match serde_json::from_value(raw) {
                Ok(page) => Some(page),
                Err(e) => {
                    warn!(error = %e, "Skipping CMS page that is not an object");
                    None
                }
            })
            .collect();
        let pages = Arc::new(PageSet::new(pages));
        debug!(count = pages.len(), "Fetched CMS pages");

        if let Some(cache) = &self.inner.pages {
            cache.insert(CACHE_KEY, pages.clone()).await;
        }
        Ok(pages)
    }

    /// Site-wide header and footer settings.
    pub async fn settings(&self) -> CmsResult<Arc<Settings>> {
        if let Some(cache) = &self.inner.settings {
            if let Some(cached) = cache.get(CACHE_KEY).await {
                return Ok(cached);
            }
        }

        let envelope: Envelope<Settings> = self.get_json("settings").await?;
        let settings = Arc::new(envelope.data);

        if let Some(cache) = &self.inner.settings {
            cache.insert(CACHE_KEY, settings.clone()).await;
        }
        Ok(settings)
    }

    /// Forwards a visitor enquiry to the CMS.
    pub async fn submit_contact(&self, form: &ContactSubmission) -> CmsResult<()> {
        form.validate()?;

        let url = self.inner.config.endpoint("contact-form");
        debug!(%url, name = %form.name, "Submitting contact form");

        let response = self
            .inner
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let body = read_body(&url, response).await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        let envelope: Envelope<Value> = serde_json::from_slice(&body)?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "the form could not be submitted".to_string());
            warn!(%message, "CMS rejected contact form");
            return Err(CmsError::Rejected(message));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CmsResult<T> {
        let url = self.inner.config.endpoint(path);
        debug!(%url, "Fetching CMS content");

        let response = self
            .inner
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let body = read_body(&url, response).await?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "CMS payload did not decode");
            CmsError::Decode(e)
        })
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> CmsError {
    if err.is_timeout() {
        warn!(%url, "CMS request timed out");
        CmsError::Timeout { url: url.to_string() }
    } else {
        warn!(%url, error = %err, "CMS request failed");
        CmsError::Http(err)
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> CmsResult<Vec<u8>> {
    let status = response.status();
    if !status.is_success() {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        warn!(%url, status = status.as_u16(), "CMS returned non-success status");
        return Err(CmsError::status(status.as_u16(), text));
    }

    let bytes = response.bytes().await.map_err(|e| transport_error(url, e))?;
    Ok(bytes.to_vec())
}
