// src/core/net.rs
// Blocking HTTP GET behind a small trait so the pipeline can run against fixtures.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::debug;
use url::Url;

use crate::config::consts::{ACCEPT_LANGUAGE as LANG, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Anything that can turn a URL into an HTML document.
/// Shared across detail workers, hence `Send + Sync`.
pub trait PageSource: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(LANG));

        let timeout = Duration::from_secs(REQUEST_TIMEOUT_SECS);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(timeout)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::new("<client>", e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::new(url, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::new(url, format!("HTTP {status}")));
        }
        resp.text().map_err(|e| FetchError::new(url, e.to_string()))
    }
}

/// Resolve an item href (absolute or site-relative) against the site base.
pub fn absolute_url(base: &str, href: &str) -> Result<String, FetchError> {
    let base = Url::parse(base).map_err(|e| FetchError::new(base, format!("bad base URL: {e}")))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| FetchError::new(href, format!("bad href: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_href_joins_site_base() {
        let url = absolute_url("https://www.nike.com", "/kr/launch/t/air-max-1").unwrap();
        assert_eq!(url, "https://www.nike.com/kr/launch/t/air-max-1");
    }

    #[test]
    fn absolute_href_is_kept() {
        let url = absolute_url("https://www.nike.com", "https://example.com/x").unwrap();
        assert_eq!(url, "https://example.com/x");
    }
}
