//! Blocking HTTP page source with retry and backoff.

use std::time::Duration;

use menucheck::v1::MenuPage;

use crate::PageSource;
use crate::error::{FetchError, Result};

/// Configuration for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Endpoint serving the first page; `page=N` is appended per request.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after the first attempt for server errors and transport failures.
    pub max_retries: u32,
    /// Backoff before the first retry (doubles each retry).
    pub initial_backoff: Duration,
    /// Backoff ceiling.
    pub max_backoff: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Fetches pages from a paginated JSON endpoint.
#[derive(Debug)]
pub struct HttpSource {
    config: FetchConfig,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    fn get_with_retry(&self, url: &str) -> Result<String> {
        let mut backoff = self.config.initial_backoff.min(self.config.max_backoff);
        let mut last_error = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(
                    url,
                    attempt,
                    max_retries = self.config.max_retries,
                    ?backoff,
                    "retrying page request"
                );
                std::thread::sleep(backoff);
                backoff = next_backoff(backoff, self.config.max_backoff);
            }

            match self.client.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return Ok(resp.text()?);
                    }
                    if !status.is_server_error() {
                        return Err(FetchError::Status {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                    last_error = format!("HTTP {status}");
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            url: url.to_string(),
            retries: self.config.max_retries,
            last_error,
        })
    }
}

/// Double `backoff`, capped at `max`.
fn next_backoff(backoff: Duration, max: Duration) -> Duration {
    backoff.saturating_mul(2).min(max)
}

impl PageSource for HttpSource {
    fn fetch_page(&self, page: u32) -> Result<MenuPage> {
        let url = page_url(&self.config.base_url, page);
        tracing::debug!(%url, "fetching page");
        let body = self.get_with_retry(&url)?;
        Ok(MenuPage::from_json(&body)?)
    }
}

/// Append `page=N` to `base`, joining with `&` when `base` already has a
/// query string.
///
/// ```
/// use menucheck_fetch::page_url;
///
/// assert_eq!(
///     page_url("https://example.com/menus.json?id=1", 2),
///     "https://example.com/menus.json?id=1&page=2"
/// );
/// assert_eq!(
///     page_url("https://example.com/menus.json", 1),
///     "https://example.com/menus.json?page=1"
/// );
/// ```
pub fn page_url(base: &str, page: u32) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serve `status` and `body` to every request on a local port. Returns
    /// the base URL and a counter of requests answered.
    fn serve(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}/menus"), hits)
    }

    fn quick_config(base_url: String, max_retries: u32) -> FetchConfig {
        FetchConfig {
            base_url,
            timeout: Duration::from_secs(5),
            max_retries,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
        }
    }

    #[test]
    fn test_page_url_without_query() {
        assert_eq!(page_url("http://h/menus", 3), "http://h/menus?page=3");
    }

    #[test]
    fn test_page_url_with_query() {
        assert_eq!(page_url("http://h/m?id=2", 1), "http://h/m?id=2&page=1");
    }

    #[test]
    fn test_config_defaults() {
        let config = FetchConfig::new("http://h/menus");
        assert_eq!(config.base_url, "http://h/menus");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.initial_backoff < config.max_backoff);
    }

    #[test]
    fn test_http_source_builds() {
        assert!(HttpSource::new(FetchConfig::new("http://h/menus")).is_ok());
    }

    #[test]
    fn test_unreachable_host_exhausts_retries() {
        let config = FetchConfig {
            base_url: "http://127.0.0.1:9/menus".into(),
            timeout: Duration::from_millis(200),
            max_retries: 1,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(1),
        };
        let source = HttpSource::new(config).unwrap();
        let err = source.fetch_page(1).unwrap_err();
        match err {
            FetchError::RetriesExhausted { url, retries, .. } => {
                assert_eq!(url, "http://127.0.0.1:9/menus?page=1");
                assert_eq!(retries, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_client_error_fails_without_retry() {
        let (url, hits) = serve("404 Not Found", "{}");
        let source = HttpSource::new(quick_config(url, 3)).unwrap();
        match source.fetch_page(1).unwrap_err() {
            FetchError::Status { status, url } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/menus?page=1"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_server_error_retried_until_exhausted() {
        let (url, hits) = serve("503 Service Unavailable", "");
        let source = HttpSource::new(quick_config(url, 2)).unwrap();
        match source.fetch_page(1).unwrap_err() {
            FetchError::RetriesExhausted {
                retries, last_error, ..
            } => {
                assert_eq!(retries, 2);
                assert!(last_error.contains("503"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_success_parses_page() {
        let (url, hits) = serve(
            "200 OK",
            r#"{"menus":[{"id":1,"child_ids":[2]}],"pagination":{"current_page":1,"per_page":1,"total":1}}"#,
        );
        let source = HttpSource::new(quick_config(url, 3)).unwrap();
        let page = source.fetch_page(1).unwrap();
        assert_eq!(page.menus.len(), 1);
        assert_eq!(page.menus[0].child_ids, Some(vec![2]));
        assert_eq!(page.pagination.total, 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_next_backoff_doubles_and_caps() {
        let max = Duration::from_secs(30);
        assert_eq!(
            next_backoff(Duration::from_millis(500), max),
            Duration::from_secs(1)
        );
        assert_eq!(next_backoff(Duration::from_secs(20), max), max);
        assert_eq!(next_backoff(Duration::MAX, max), max);
    }

    #[test]
    fn test_huge_initial_backoff_is_capped() {
        let (url, hits) = serve("503 Service Unavailable", "");
        let config = FetchConfig {
            initial_backoff: Duration::MAX,
            ..quick_config(url, 1)
        };
        let source = HttpSource::new(config).unwrap();
        assert!(matches!(
            source.fetch_page(1),
            Err(FetchError::RetriesExhausted { .. })
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
