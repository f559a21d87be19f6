//! Snapshot service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::operation::SnapshotParams;
use crate::request::EsRequest;
use crate::response::EsResponse;
use crate::{SnapshotProvider, TRACING_TARGET};

/// Snapshot service wrapper with observability.
///
/// Adds structured logging around any [`SnapshotProvider`] implementation
/// and turns non-2xx upstream responses into errors carrying the response
/// body. The inner provider is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct SnapshotService {
    inner: Arc<dyn SnapshotProvider>,
}

impl fmt::Debug for SnapshotService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotService").finish_non_exhaustive()
    }
}

impl SnapshotService {
    /// Create a new snapshot service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: SnapshotProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Selects the operation for `params`, executes it, and relays the
    /// response.
    ///
    /// Returns an error without any network call when the parameter set is
    /// incomplete or ambiguous, and an `upstream_error` carrying the raw
    /// body when Elasticsearch answers with a non-2xx status.
    pub async fn dispatch(&self, params: SnapshotParams) -> Result<EsResponse> {
        let request = params.into_request()?;
        let response = self.execute(&request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::upstream_error().with_message(format!(
                "elasticsearch returned status {}: {}",
                response.status_code, response.body
            )))
        }
    }

    /// Executes a single prepared request through the inner provider.
    pub async fn execute(&self, request: &EsRequest) -> Result<EsResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            method = request.method.as_str(),
            path = %request.path,
            body_len = request.body_bytes().len(),
            "Sending snapshot API request"
        );

        let result = self.inner.execute(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(response) => {
                if response.is_success() {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        status_code = response.status_code,
                        elapsed_ms = elapsed.as_millis(),
                        "Snapshot API request succeeded"
                    );
                } else {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        status_code = response.status_code,
                        body = %response.body,
                        elapsed_ms = elapsed.as_millis(),
                        "Snapshot API request rejected upstream"
                    );
                }
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Snapshot API request failed"
                );
            }
        }

        result
    }
}
