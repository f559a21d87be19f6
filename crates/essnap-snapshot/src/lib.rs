#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod service;

pub mod error;
pub mod operation;
pub mod request;
pub mod response;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use operation::{Operation, SnapshotParams};
pub use request::{EsRequest, Method, RepositoryConfig, SnapshotRequest};
pub use response::EsResponse;
pub use service::SnapshotService;

/// Tracing target for snapshot operations.
pub const TRACING_TARGET: &str = "essnap_snapshot::service";

/// Core trait for executing prepared snapshot API requests.
///
/// Implement this trait to provide the signed HTTP transport; the reqwest
/// implementation lives in `essnap-reqwest`.
#[async_trait::async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Sends one prepared request and returns the raw upstream response.
    async fn execute(&self, request: &EsRequest) -> Result<EsResponse>;
}
