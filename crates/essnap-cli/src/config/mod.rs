//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── aws: AwsConfig              # Region, credentials, profile
//! ├── client: EsClientConfig      # Endpoint host, TLS, timeout
//! └── operation: OperationConfig  # Repository / snapshot parameters
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! essnap --region eu-west-1 --host logs.example.com \
//!     --repository-name s3snapshots --snapshot-name 2016-02-01
//!
//! # Or via environment variables
//! AWS_REGION=eu-west-1 ES_HOST=logs.example.com essnap \
//!     --repository-name s3snapshots --snapshot-name 2016-02-01
//! ```

mod aws;
mod operation;

pub use aws::AwsConfig;
use clap::Parser;
use essnap_reqwest::{EsClient, EsClientConfig};
use essnap_snapshot::SnapshotService;
pub use operation::OperationConfig;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "essnap")]
#[command(about = "Register S3 snapshot repositories and take Elasticsearch snapshots")]
#[command(version)]
pub struct Cli {
    /// AWS region and credential configuration.
    #[clap(flatten)]
    pub aws: AwsConfig,

    /// Elasticsearch endpoint and HTTP client configuration.
    #[clap(flatten)]
    pub client: EsClientConfig,

    /// Snapshot operation parameters.
    #[clap(flatten)]
    pub operation: OperationConfig,
}

/// Creates the snapshot service from CLI configuration.
pub fn create_snapshot_service(cli: &Cli) -> SnapshotService {
    let client = EsClient::new(cli.client.clone(), cli.aws.signing_config());
    client.into_service()
}

#[cfg(test)]
mod tests {
    use essnap_snapshot::Method;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_registration_invocation_builds_expected_request() {
        let cli = Cli::try_parse_from([
            "essnap",
            "--region",
            "eu-west-1",
            "--host",
            "logs.example.com",
            "--repository-name",
            "s3snapshots",
            "--bucket",
            "logs",
            "--role-arn",
            "arn:aws:iam::1234:role/X",
        ])
        .unwrap();

        let request = cli.operation.to_params(&cli.aws.region).into_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/_snapshot/s3snapshots");

        let body: serde_json::Value = serde_json::from_slice(request.body_bytes()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
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
    fn test_snapshot_invocation_builds_expected_request() {
        let cli = Cli::try_parse_from([
            "essnap",
            "--region",
            "eu-west-1",
            "--elasticsearch-host",
            "logs.example.com",
            "--snapshot-repository-name",
            "s3snapshots",
            "--snapshot-name",
            "2016-02-01",
        ])
        .unwrap();

        let request = cli.operation.to_params(&cli.aws.region).into_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/_snapshot/s3snapshots/2016-02-01");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_bucket_requires_role_arn() {
        let result = Cli::try_parse_from([
            "essnap",
            "--region",
            "eu-west-1",
            "--host",
            "logs.example.com",
            "--repository-name",
            "s3snapshots",
            "--bucket",
            "logs",
        ]);
        assert!(result.is_err());
    }
}
