use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::time::Duration;

use crate::collect::global_variables::DEFAULT_PROBE_TIMEOUT;

/// Result of a HEAD request against a remote raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Server answered 200 OK
    Reachable,
    /// Server answered with another status (redirects included)
    Status(u16),
    /// No usable answer: bad URL, connection error, timeout
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable)
    }
}

/// Reachability check used by the loader before a layer is built.
pub trait UrlProbe {
    fn probe(&self, url: &str) -> ProbeOutcome;

    /// Collapse the outcome to "answered 200 or not".
    fn is_accessible(&self, url: &str) -> bool {
        self.probe(url).is_reachable()
    }
}

/// HEAD-request prober backed by a blocking reqwest client.
/// Redirects are not followed, so a 301/302 counts as not accessible.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .context("Failed to create HTTP client")?;
        Ok(HttpProbe { client })
    }
}

impl UrlProbe for HttpProbe {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send() {
            Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::Reachable,
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) => ProbeOutcome::Failed(e.to_string()),
        }
    }
}

/// One-shot HEAD request with default settings.
pub fn probe_url(url: &str) -> ProbeOutcome {
    match HttpProbe::new() {
        Ok(probe) => probe.probe(url),
        Err(e) => ProbeOutcome::Failed(format!("{:#}", e)),
    }
}

/// Any failure, timeout or non-200 answer is reported as `false`.
pub fn test_url_access(url: &str) -> bool {
    probe_url(url).is_reachable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Instant;

    /// Serve a single HTTP response on an ephemeral local port.
    fn serve_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nLocation: http://{}/moved.tif\r\nConnection: close\r\n\r\n",
                    status_line, addr
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/Ardquin_DSM.tif", addr)
    }

    #[test]
    fn test_head_ok() {
        let url = serve_once("200 OK");
        let probe = HttpProbe::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(probe.probe(&url), ProbeOutcome::Reachable);
    }

    #[test]
    fn test_head_not_found() {
        let url = serve_once("404 Not Found");
        let probe = HttpProbe::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(probe.probe(&url), ProbeOutcome::Status(404));
        assert!(!probe.probe(&serve_once("404 Not Found")).is_reachable());
    }

    #[test]
    fn test_head_redirect_is_not_followed() {
        let url = serve_once("301 Moved Permanently");
        let probe = HttpProbe::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(probe.probe(&url), ProbeOutcome::Status(301));
    }

    #[test]
    fn test_head_timeout_is_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            // Accept and hold the connection without ever answering
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(3));
                drop(stream);
            }
        });

        let probe = HttpProbe::with_timeout(Duration::from_millis(100)).unwrap();
        let started = Instant::now();
        let outcome = probe.probe(&format!("http://{}/Saul_DSM.tif", addr));
        assert!(matches!(outcome, ProbeOutcome::Failed(_)));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn test_one_shot_request_with_defaults() {
        assert_eq!(probe_url(&serve_once("200 OK")), ProbeOutcome::Reachable);
        assert_eq!(probe_url(&serve_once("404 Not Found")), ProbeOutcome::Status(404));
        assert!(matches!(
            probe_url("http://127.0.0.1:9/missing.tif"),
            ProbeOutcome::Failed(_)
        ));
        assert!(test_url_access(&serve_once("200 OK")));
    }

    #[test]
    fn test_url_access_swallows_errors() {
        // Nothing listens on the discard port locally
        assert!(!test_url_access("http://127.0.0.1:9/missing.tif"));
        assert!(!test_url_access("not a url"));
    }
}
