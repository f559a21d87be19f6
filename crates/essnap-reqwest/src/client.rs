//! Reqwest-based signed client for the Elasticsearch snapshot API.

use std::sync::Arc;
use std::time::SystemTime;

use essnap_snapshot::{EsRequest, EsResponse, SnapshotProvider, SnapshotService};
use jiff::Timestamp;
use reqwest::Client;

use crate::config::EsClientConfig;
use crate::credentials::SigningConfig;
use crate::error::Result;
use crate::sign;

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "essnap_reqwest::client";

/// Inner client that holds the HTTP client and configuration.
struct EsClientInner {
    http: Client,
    config: EsClientConfig,
    signing: SigningConfig,
}

/// Signed HTTP client for the Elasticsearch snapshot API.
///
/// Implements the [`SnapshotProvider`] trait: each call resolves
/// credentials, signs the request with SigV4 for service `es`, sends it,
/// and relays the raw response.
///
/// # Examples
///
/// ```rust,ignore
/// use essnap_reqwest::{EsClient, EsClientConfig, SigningConfig};
/// use essnap_snapshot::SnapshotParams;
///
/// let config = EsClientConfig::new("logs.example.com");
/// let signing = SigningConfig::with_profile("eu-west-1", "production");
/// let service = EsClient::new(config, signing).into_service();
///
/// let params = SnapshotParams::new("s3snapshots", "eu-west-1")
///     .with_snapshot_name("2016-02-01");
/// let response = service.dispatch(params).await?;
/// ```
#[derive(Clone)]
pub struct EsClient {
    inner: Arc<EsClientInner>,
}

impl std::fmt::Debug for EsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl EsClient {
    /// Creates a new client with the given endpoint and signing config.
    pub fn new(config: EsClientConfig, signing: SigningConfig) -> Self {
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            host = %config.host,
            region = %signing.region,
            timeout_ms = timeout.as_millis(),
            "Creating Elasticsearch client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .expect("failed to create HTTP client");

        let inner = EsClientInner {
            http,
            config,
            signing,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &EsClientConfig {
        &self.inner.config
    }

    /// Converts this client into a [`SnapshotService`].
    pub fn into_service(self) -> SnapshotService {
        SnapshotService::new(self)
    }

    /// Builds, signs, and sends one request.
    async fn send(&self, request: &EsRequest, started_at: Timestamp) -> Result<EsResponse> {
        let url = self.inner.config.base_url()?.join(&request.path)?;
        let credentials = self.inner.signing.resolve_credentials().await?;

        // The Host header has to be present before signing so it is part of
        // the canonical request.
        let host_header = match url.port() {
            Some(port) => format!("{}:{port}", url.host_str().unwrap_or_default()),
            None => url.host_str().unwrap_or_default().to_owned(),
        };

        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(url.as_str())
            .header(http::header::HOST, host_header);
        if request.body.is_some() {
            builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        }
        let mut http_request = builder.body(request.body_bytes().to_vec())?;

        sign::sign_request(
            &mut http_request,
            &credentials,
            &self.inner.signing.region,
            SystemTime::now(),
        )?;

        tracing::debug!(
            target: TRACING_TARGET,
            method = request.method.as_str(),
            url = %url,
            "Sending signed request"
        );

        let reqwest_request = reqwest::Request::try_from(http_request)?;
        let http_response = self.inner.http.execute(reqwest_request).await?;

        let status_code = http_response.status().as_u16();
        let body = http_response.text().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            status_code,
            body_len = body.len(),
            "Received response"
        );

        Ok(EsResponse::new(status_code, body, started_at))
    }
}

#[async_trait::async_trait]
impl SnapshotProvider for EsClient {
    async fn execute(&self, request: &EsRequest) -> essnap_snapshot::Result<EsResponse> {
        let started_at = Timestamp::now();
        let response = self
            .send(request, started_at)
            .await
            .map_err(essnap_snapshot::Error::from)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use essnap_snapshot::{ErrorKind, SnapshotParams};

    use super::*;

    fn local_client(port: u16) -> EsClient {
        let config = EsClientConfig::new(format!("127.0.0.1:{port}"))
            .with_insecure(true)
            .with_timeout(5);
        let signing = SigningConfig::with_static_keys("eu-west-1", "AKIDEXAMPLE", "secret");
        EsClient::new(config, signing)
    }

    #[test]
    fn test_client_creation() {
        let client = local_client(9200);
        assert_eq!(client.config().host, "127.0.0.1:9200");
        assert!(client.config().insecure);
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_transport_failure() {
        // Port 9 (discard) has no listener, so the connection is refused.
        let service = local_client(9).into_service();
        let params = SnapshotParams::new("s3snapshots", "eu-west-1")
            .with_snapshot_name("2016-02-01");

        let error = service.dispatch(params).await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::TransportFailure);
    }

    #[tokio::test]
    async fn test_invalid_params_fail_before_any_connection() {
        let service = local_client(9).into_service();
        let params = SnapshotParams::new("s3snapshots", "eu-west-1");

        let error = service.dispatch(params).await.unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidArgument);
    }
}
