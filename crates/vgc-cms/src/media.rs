//! Media URL normalization.
//!
//! The CMS returns image paths in several shapes: absolute URLs,
//! `builder/<file>` paths, bare file names, with or without leading
//! slashes. Every shape is turned into an absolute URL under the storage
//! base's `builder/` directory.

/// Resolves CMS media paths against a storage base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaResolver {
    builder_base: String,
}

impl MediaResolver {
    /// Creates a resolver for the given storage base (e.g. `https://host/storage/`).
    pub fn new(storage_base: &str) -> Self {
        Self {
            builder_base: format!("{}/builder/", storage_base.trim_end_matches('/')),
        }
    }

    /// Absolute URL for `path`, or `None` if the path is empty.
    pub fn resolve(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;

        if is_absolute(path) {
            return Some(path.to_string());
        }

        let normalized = path.trim_start_matches('/');
        let normalized = normalized.strip_prefix("builder/").unwrap_or(normalized);
        Some(format!("{}{}", self.builder_base, normalized))
    }

    /// Absolute URL for `path`, or an empty string.
    pub fn ensure_url(&self, path: Option<&str>) -> String {
        self.resolve(path).unwrap_or_default()
    }

    /// Absolute URL for `path`, or a local fallback image.
    pub fn or_local(&self, path: Option<&str>, fallback: &str) -> String {
        self.resolve(path).unwrap_or_else(|| fallback.to_string())
    }
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STORAGE_BASE)
    }
}

/// True for `http://` and `https://` URLs, in any case.
pub fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaResolver {
        MediaResolver::new("https://cms.example/storage/")
    }

    #[test]
    fn test_empty_paths_resolve_to_nothing() {
        assert_eq!(resolver().resolve(None), None);
        assert_eq!(resolver().resolve(Some("")), None);
        assert_eq!(resolver().resolve(Some("   ")), None);
        assert_eq!(resolver().ensure_url(None), "");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let url = "https://cdn.example/a.png";
        assert_eq!(resolver().ensure_url(Some(url)), url);
        assert_eq!(resolver().ensure_url(Some("HTTP://x/y.png")), "HTTP://x/y.png");
    }

    #[test]
    fn test_relative_paths_land_under_builder() {
        let r = resolver();
        let expected = "https://cms.example/storage/builder/01ABC.webp";
        assert_eq!(r.ensure_url(Some("01ABC.webp")), expected);
        assert_eq!(r.ensure_url(Some("/01ABC.webp")), expected);
        assert_eq!(r.ensure_url(Some("builder/01ABC.webp")), expected);
        assert_eq!(r.ensure_url(Some("///builder/01ABC.webp")), expected);
    }

    #[test]
    fn test_storage_base_without_trailing_slash() {
        let r = MediaResolver::new("https://cms.example/storage");
        assert_eq!(
            r.ensure_url(Some("x.png")),
            "https://cms.example/storage/builder/x.png"
        );
    }

    #[test]
    fn test_local_fallback() {
        assert_eq!(
            resolver().or_local(None, "/public/images/about-img.svg"),
            "/public/images/about-img.svg"
        );
    }
}
