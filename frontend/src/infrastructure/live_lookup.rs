//! Live Broadcast Lookup
//!
//! Resolves a room code to the list of live-stream URLs published for it.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Reasons a live lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiveLookupError {
    #[error("live lookup returned HTTP {0}")]
    Status(u16),

    #[error("no live streams available for this room")]
    NoStreams,

    #[error("live lookup request failed: {0}")]
    Transport(String),

    #[error("invalid live lookup response: {0}")]
    Decode(String),
}

/// Source of live-broadcast URLs for a room code.
pub trait LiveLookup: Send + Sync {
    fn lookup(&self, code: &str) -> Result<Vec<String>, LiveLookupError>;
}

#[derive(Debug, Deserialize)]
struct LiveResponse {
    #[serde(default)]
    data: Option<Vec<String>>,
}

/// Interprets a lookup response. Anything but a 200 with a non-empty
/// `data` list is an error.
pub fn parse_lookup_response(status: u16, body: &str) -> Result<Vec<String>, LiveLookupError> {
    if status != 200 {
        return Err(LiveLookupError::Status(status));
    }

    let response: LiveResponse =
        serde_json::from_str(body).map_err(|e| LiveLookupError::Decode(e.to_string()))?;

    match response.data {
        Some(urls) if !urls.is_empty() => Ok(urls),
        _ => Err(LiveLookupError::NoStreams),
    }
}

/// `GET {base}get_live?roomid={code}` over HTTP.
pub struct HttpLiveLookup {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLiveLookup {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LiveLookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| LiveLookupError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}get_live", self.base_url)
    }
}

impl LiveLookup for HttpLiveLookup {
    fn lookup(&self, code: &str) -> Result<Vec<String>, LiveLookupError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("roomid", code)])
            .send()
            .map_err(|e| LiveLookupError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| LiveLookupError::Transport(e.to_string()))?;

        parse_lookup_response(status, &body)
    }
}

/// Stands in when no lookup service could be set up; every lookup
/// reports why.
pub struct UnavailableLookup {
    reason: LiveLookupError,
}

impl UnavailableLookup {
    pub fn new(reason: LiveLookupError) -> Self {
        Self { reason }
    }
}

impl LiveLookup for UnavailableLookup {
    fn lookup(&self, _code: &str) -> Result<Vec<String>, LiveLookupError> {
        Err(self.reason.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls() {
        let urls = parse_lookup_response(200, r#"{"data":["urlA","urlB"]}"#).unwrap();
        assert_eq!(urls, vec!["urlA".to_string(), "urlB".to_string()]);
    }

    #[test]
    fn test_empty_data_is_no_streams() {
        assert_eq!(
            parse_lookup_response(200, r#"{"data":[]}"#),
            Err(LiveLookupError::NoStreams)
        );
        assert_eq!(
            parse_lookup_response(200, r#"{"data":null}"#),
            Err(LiveLookupError::NoStreams)
        );
        assert_eq!(
            parse_lookup_response(200, "{}"),
            Err(LiveLookupError::NoStreams)
        );
    }

    #[test]
    fn test_non_200_status() {
        assert_eq!(
            parse_lookup_response(404, r#"{"data":["urlA"]}"#),
            Err(LiveLookupError::Status(404))
        );
    }

    #[test]
    fn test_malformed_body() {
        let result = parse_lookup_response(200, "<html>");
        assert!(matches!(result, Err(LiveLookupError::Decode(_))));
    }

    #[test]
    fn test_unavailable_lookup_reports_reason() {
        let lookup = UnavailableLookup::new(LiveLookupError::Transport("no tls".into()));
        assert_eq!(
            lookup.lookup("abc"),
            Err(LiveLookupError::Transport("no tls".into()))
        );
    }

    #[test]
    fn test_endpoint_appends_path() {
        let lookup = HttpLiveLookup::new("http://localhost:9000/").unwrap();
        assert_eq!(lookup.endpoint(), "http://localhost:9000/get_live");
    }
}
