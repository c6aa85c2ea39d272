//! Client configuration, resolved once at start-up.

use std::time::Duration;

pub const DEV_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every `/api/...` path.
    pub api_base_url: String,
    /// Upper bound on session validation, login and the admin check.
    pub request_timeout: Duration,
}

/// Raw inputs; the browser build fills these from `option_env!` and `window.location`.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource<'a> {
    pub api_url: Option<&'a str>,
    pub request_timeout_ms: Option<&'a str>,
    pub page_origin: Option<String>,
    pub dev: bool,
}

impl ClientConfig {
    /// An explicit API URL wins; otherwise dev builds talk to the local
    /// backend and release builds to the origin that served the page.
    ///
    /// ```
    /// use portal::config::{ClientConfig, ConfigSource, DEV_API_URL};
    ///
    /// let config = ClientConfig::resolve(ConfigSource { dev: true, ..Default::default() });
    /// assert_eq!(config.api_base_url, DEV_API_URL);
    /// ```
    pub fn resolve(source: ConfigSource<'_>) -> Self {
        let api_base_url = match source.api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None if source.dev => DEV_API_URL.to_string(),
            None => source.page_origin.unwrap_or_default(),
        };

        let request_timeout = source
            .request_timeout_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self {
            api_base_url,
            request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_build_uses_page_origin() {
        let config = ClientConfig::resolve(ConfigSource {
            page_origin: Some("https://portal.example".to_string()),
            ..Default::default()
        });
        assert_eq!(config.api_base_url, "https://portal.example");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_explicit_url_overrides_dev_default() {
        let config = ClientConfig::resolve(ConfigSource {
            api_url: Some(" http://10.0.0.5:9000 "),
            dev: true,
            ..Default::default()
        });
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_timeout_parsing() {
        let parsed = ClientConfig::resolve(ConfigSource {
            request_timeout_ms: Some("2500"),
            ..Default::default()
        });
        assert_eq!(parsed.request_timeout, Duration::from_millis(2500));

        for bad in ["0", "-1", "soon", ""] {
            let config = ClientConfig::resolve(ConfigSource {
                request_timeout_ms: Some(bad),
                ..Default::default()
            });
            assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT, "{bad:?}");
        }
    }
}
