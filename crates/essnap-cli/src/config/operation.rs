//! Snapshot operation parameters.

use clap::Args;
use essnap_snapshot::SnapshotParams;

/// Parameters selecting the operation to perform.
///
/// Supplying `--bucket` and `--role-arn` registers a snapshot repository;
/// supplying `--snapshot-name` takes a snapshot. Registration wins when both
/// sets are given.
#[derive(Debug, Clone, Args)]
pub struct OperationConfig {
    /// Name of the repository where snapshots are saved
    #[arg(
        long = "repository-name",
        visible_alias = "snapshot-repository-name",
        env = "ES_REPOSITORY_NAME"
    )]
    pub repository_name: String,

    /// S3 bucket backing the repository (repository registration)
    #[arg(long = "bucket", requires = "role_arn")]
    pub bucket: Option<String>,

    /// ARN of the role to use for the S3 bucket (repository registration)
    #[arg(long = "role-arn", requires = "bucket")]
    pub role_arn: Option<String>,

    /// Name for the snapshot to take (snapshot creation)
    #[arg(long = "snapshot-name")]
    pub snapshot_name: Option<String>,
}

impl OperationConfig {
    /// Builds the unified parameter set for one invocation.
    pub fn to_params(&self, region: &str) -> SnapshotParams {
        let mut params = SnapshotParams::new(self.repository_name.clone(), region);
        if let Some(bucket) = &self.bucket {
            params = params.with_bucket(bucket.clone());
        }
        if let Some(role_arn) = &self.role_arn {
            params = params.with_role_arn(role_arn.clone());
        }
        if let Some(snapshot_name) = &self.snapshot_name {
            params = params.with_snapshot_name(snapshot_name.clone());
        }
        params
    }
}
