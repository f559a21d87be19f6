//! Snapshot API response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response from a single snapshot API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsResponse {
    /// HTTP status code returned by Elasticsearch.
    pub status_code: u16,
    /// Raw response body text, relayed verbatim to the caller.
    pub body: String,
    /// Timestamp when the request was initiated.
    pub started_at: Timestamp,
    /// Timestamp when the response was received.
    pub finished_at: Timestamp,
}

impl EsResponse {
    /// Creates a new response.
    pub fn new(status_code: u16, body: impl Into<String>, started_at: Timestamp) -> Self {
        Self {
            status_code,
            body: body.into(),
            started_at,
            finished_at: Timestamp::now(),
        }
    }

    /// Returns whether the call was successful (2xx status code).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Calculates the response time as a duration.
    pub fn duration(&self) -> jiff::Span {
        self.started_at.until(self.finished_at).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = EsResponse::new(200, "{\"acknowledged\":true}", Timestamp::now());
        assert!(response.is_success());
        assert_eq!(response.body, "{\"acknowledged\":true}");
    }

    #[test]
    fn test_non_2xx_is_not_success() {
        let started_at = Timestamp::now();
        assert!(!EsResponse::new(404, "not found", started_at).is_success());
        assert!(!EsResponse::new(500, "boom", started_at).is_success());
        assert!(EsResponse::new(201, "created", started_at).is_success());
    }
}
