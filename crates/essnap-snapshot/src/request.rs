//! Snapshot API request construction.
//!
//! Each operation against the Elasticsearch snapshot API is a single HTTP
//! request. The types here turn validated caller parameters into an
//! [`EsRequest`] holding the method, a percent-encoded path, and an optional
//! JSON body. Values are serialized through serde rather than concatenated,
//! so embedded quotes or slashes cannot alter the request shape.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters escaped in a URL path segment, per RFC 3986.
///
/// Includes `/` so a user-supplied name cannot introduce extra path segments.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

/// Percent-encodes a single path segment.
fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// HTTP methods used by the snapshot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Register a snapshot repository.
    Post,
    /// Trigger a snapshot.
    Put,
}

impl Method {
    /// Returns the method as an HTTP verb string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully constructed snapshot API request, ready to be signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsRequest {
    /// HTTP method for the request.
    pub method: Method,
    /// Absolute, percent-encoded URL path.
    pub path: String,
    /// JSON body bytes, if the operation carries one.
    pub body: Option<Vec<u8>>,
}

impl EsRequest {
    /// Returns the body bytes, or an empty slice when the request has none.
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Parameters for registering an S3-backed snapshot repository.
///
/// Consumed to build one `POST /_snapshot/{repository_name}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Name under which the repository is registered.
    pub repository_name: String,
    /// S3 bucket backing the repository.
    pub bucket: String,
    /// AWS region of the bucket.
    pub region: String,
    /// ARN of the IAM role Elasticsearch assumes to reach the bucket.
    pub role_arn: String,
}

/// JSON body of a repository registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryBody {
    /// Repository type, always `"s3"`.
    #[serde(rename = "type")]
    pub repository_type: String,
    /// S3 settings for the repository.
    pub settings: RepositorySettings,
}

/// The `settings` object of a repository registration body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    pub bucket: String,
    pub region: String,
    pub role_arn: String,
}

impl RepositoryConfig {
    /// Creates a new repository registration config.
    pub fn new(
        repository_name: impl Into<String>,
        bucket: impl Into<String>,
        region: impl Into<String>,
        role_arn: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            bucket: bucket.into(),
            region: region.into(),
            role_arn: role_arn.into(),
        }
    }

    /// Validates that all required fields are present and non-empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("repository_name", &self.repository_name),
            ("bucket", &self.bucket),
            ("region", &self.region),
            ("role_arn", &self.role_arn),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(Error::invalid_argument()
                    .with_message(format!("{name} is required and must be non-empty")));
            }
        }
        Ok(())
    }

    /// Builds the registration request: `POST /_snapshot/{repository_name}`
    /// with the typed JSON body.
    pub fn into_request(self) -> Result<EsRequest> {
        self.validate()?;

        let path = format!("/_snapshot/{}", encode_segment(&self.repository_name));
        let body = RepositoryBody {
            repository_type: "s3".to_owned(),
            settings: RepositorySettings {
                bucket: self.bucket,
                region: self.region,
                role_arn: self.role_arn,
            },
        };
        let body = serde_json::to_vec(&body)
            .map_err(|e| Error::invalid_argument().with_source(e))?;

        Ok(EsRequest {
            method: Method::Post,
            path,
            body: Some(body),
        })
    }
}

/// Parameters for triggering a named snapshot into a registered repository.
///
/// Consumed to build one `PUT /_snapshot/{repository_name}/{snapshot_name}`
/// request with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    /// Repository the snapshot is stored into.
    pub repository_name: String,
    /// Name of the snapshot to create.
    pub snapshot_name: String,
}

impl SnapshotRequest {
    /// Creates a new snapshot creation request.
    pub fn new(repository_name: impl Into<String>, snapshot_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            snapshot_name: snapshot_name.into(),
        }
    }

    /// Validates that both fields are present and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.repository_name.is_empty() {
            return Err(Error::invalid_argument()
                .with_message("repository_name is required and must be non-empty"));
        }
        if self.snapshot_name.is_empty() {
            return Err(Error::invalid_argument()
                .with_message("snapshot_name is required and must be non-empty"));
        }
        Ok(())
    }

    /// Builds the snapshot request: `PUT /_snapshot/{repository}/{snapshot}`.
    pub fn into_request(self) -> Result<EsRequest> {
        self.validate()?;

        let path = format!(
            "/_snapshot/{}/{}",
            encode_segment(&self.repository_name),
            encode_segment(&self.snapshot_name)
        );

        Ok(EsRequest {
            method: Method::Put,
            path,
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_registration_request_path_and_body() {
        let config = RepositoryConfig::new(
            "s3snapshots",
            "logs",
            "eu-west-1",
            "arn:aws:iam::1234:role/X",
        );
        let request = config.into_request().unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/_snapshot/s3snapshots");

        let body: Value = serde_json::from_slice(request.body_bytes()).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "s3",
                "settings": {
                    "bucket": "logs",
                    "region": "eu-west-1",
                    "role_arn": "arn:aws:iam::1234:role/X",
                }
            })
        );
    }

    #[test]
    fn test_registration_rejects_empty_fields() {
        let config = RepositoryConfig::new("s3snapshots", "", "eu-west-1", "arn:aws:iam::1:role/X");
        let error = config.into_request().unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::InvalidArgument);
        assert!(error.to_string().contains("bucket"));
    }

    #[test]
    fn test_registration_body_escapes_quotes() {
        let config = RepositoryConfig::new("repo", "lo\"gs", "eu-west-1", "arn:aws:iam::1:role/X");
        let request = config.into_request().unwrap();

        // A quote in the bucket name must not break out of the JSON string.
        let body: RepositoryBody = serde_json::from_slice(request.body_bytes()).unwrap();
        assert_eq!(body.settings.bucket, "lo\"gs");
    }

    #[test]
    fn test_snapshot_request_path() {
        let request = SnapshotRequest::new("s3snapshots", "2016-02-01")
            .into_request()
            .unwrap();

        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/_snapshot/s3snapshots/2016-02-01");
        assert!(request.body.is_none());
        assert!(request.body_bytes().is_empty());
    }

    #[test]
    fn test_snapshot_request_encodes_slashes() {
        let request = SnapshotRequest::new("re/po", "snap?shot")
            .into_request()
            .unwrap();
        assert_eq!(request.path, "/_snapshot/re%2Fpo/snap%3Fshot");
    }

    #[test]
    fn test_snapshot_request_rejects_missing_name() {
        let error = SnapshotRequest::new("s3snapshots", "")
            .into_request()
            .unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
    }
}
