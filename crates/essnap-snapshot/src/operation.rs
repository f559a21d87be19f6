//! Operation selection for the unified parameter set.
//!
//! A single invocation performs exactly one of two operations, chosen by
//! which optional parameters are present. Selection happens before any
//! network activity, so an ambiguous or incomplete parameter set never
//! issues a request.

use crate::error::{Error, Result};
use crate::request::{EsRequest, RepositoryConfig, SnapshotRequest};

/// Unified parameter set for one snapshot API invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotParams {
    /// Name of the snapshot repository.
    pub repository_name: String,
    /// AWS region, reused as the repository `region` setting.
    pub region: String,
    /// S3 bucket backing the repository (registration only).
    pub bucket: Option<String>,
    /// IAM role ARN for bucket access (registration only).
    pub role_arn: Option<String>,
    /// Name of the snapshot to take (snapshot creation only).
    pub snapshot_name: Option<String>,
}

/// The operation selected from a [`SnapshotParams`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Register an S3-backed snapshot repository.
    Register(RepositoryConfig),
    /// Trigger a named snapshot into a registered repository.
    Create(SnapshotRequest),
}

impl Operation {
    /// Builds the HTTP request for this operation.
    pub fn into_request(self) -> Result<EsRequest> {
        match self {
            Self::Register(config) => config.into_request(),
            Self::Create(request) => request.into_request(),
        }
    }
}

impl SnapshotParams {
    /// Creates a parameter set with the two always-required fields.
    pub fn new(repository_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    /// Sets the S3 bucket for repository registration.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Sets the IAM role ARN for repository registration.
    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    /// Sets the snapshot name for snapshot creation.
    pub fn with_snapshot_name(mut self, snapshot_name: impl Into<String>) -> Self {
        self.snapshot_name = Some(snapshot_name.into());
        self
    }

    /// Selects the operation to perform.
    ///
    /// `bucket` + `role_arn` present selects registration; otherwise a
    /// present `snapshot_name` selects snapshot creation. When both sets are
    /// supplied, registration wins. When neither is, this fails with
    /// `invalid_argument` and no request is built.
    pub fn operation(&self) -> Result<Operation> {
        let bucket = present(self.bucket.as_deref());
        let role_arn = present(self.role_arn.as_deref());
        let snapshot_name = present(self.snapshot_name.as_deref());

        if let (Some(bucket), Some(role_arn)) = (bucket, role_arn) {
            return Ok(Operation::Register(RepositoryConfig::new(
                self.repository_name.clone(),
                bucket,
                self.region.clone(),
                role_arn,
            )));
        }

        if let Some(snapshot_name) = snapshot_name {
            return Ok(Operation::Create(SnapshotRequest::new(
                self.repository_name.clone(),
                snapshot_name,
            )));
        }

        Err(Error::invalid_argument().with_message(
            "required parameters are missing: supply bucket and role_arn \
             to register a repository, or snapshot_name to take a snapshot",
        ))
    }

    /// Selects the operation and builds its HTTP request in one step.
    pub fn into_request(self) -> Result<EsRequest> {
        self.operation()?.into_request()
    }
}

/// Treats absent and empty string parameters the same way.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::request::Method;

    #[test]
    fn test_registration_selected_when_bucket_and_role_present() {
        let params = SnapshotParams::new("s3snapshots", "eu-west-1")
            .with_bucket("logs")
            .with_role_arn("arn:aws:iam::1234:role/X");

        let operation = params.operation().unwrap();
        assert!(matches!(operation, Operation::Register(_)));

        let request = operation.into_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/_snapshot/s3snapshots");
        let body: serde_json::Value = serde_json::from_slice(request.body_bytes()).unwrap();
        assert_eq!(body["type"], "s3");
        assert_eq!(body["settings"]["bucket"], "logs");
        assert_eq!(body["settings"]["region"], "eu-west-1");
        assert_eq!(body["settings"]["role_arn"], "arn:aws:iam::1234:role/X");
    }

    #[test]
    fn test_snapshot_selected_when_only_name_present() {
        let params =
            SnapshotParams::new("s3snapshots", "eu-west-1").with_snapshot_name("2016-02-01");

        let request = params.into_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/_snapshot/s3snapshots/2016-02-01");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_registration_takes_precedence_over_snapshot() {
        let params = SnapshotParams::new("s3snapshots", "eu-west-1")
            .with_bucket("logs")
            .with_role_arn("arn:aws:iam::1234:role/X")
            .with_snapshot_name("2016-02-01");

        assert!(matches!(
            params.operation().unwrap(),
            Operation::Register(_)
        ));
    }

    #[test]
    fn test_neither_operation_fails_without_request() {
        let params = SnapshotParams::new("s3snapshots", "eu-west-1");
        let error = params.operation().unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidArgument);
        assert!(error.to_string().contains("required parameters are missing"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let params = SnapshotParams::new("s3snapshots", "eu-west-1")
            .with_bucket("")
            .with_role_arn("")
            .with_snapshot_name("");
        assert_eq!(
            params.operation().unwrap_err().kind,
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_bucket_without_role_arn_is_not_registration() {
        // An incomplete registration pair falls through to snapshot
        // selection, and fails when no snapshot name is given either.
        let params = SnapshotParams::new("s3snapshots", "eu-west-1").with_bucket("logs");
        assert_eq!(
            params.operation().unwrap_err().kind,
            ErrorKind::InvalidArgument
        );
    }
}
