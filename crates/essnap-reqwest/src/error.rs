//! Internal error types for essnap-reqwest.

use thiserror::Error;

/// Result type alias for essnap-reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error type for essnap-reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Request could not be materialized.
    #[error("invalid HTTP request: {0}")]
    Http(#[from] http::Error),
    /// Endpoint URL is malformed.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    /// SigV4 signing failed.
    #[error("SigV4 signing error: {0}")]
    Sign(#[from] aws_sigv4::http_request::SigningError),
    /// SigV4 signing parameters were incomplete.
    #[error("SigV4 configuration error: {0}")]
    SignParams(#[from] aws_sigv4::sign::v4::signing_params::BuildError),
    /// No usable AWS credentials could be resolved.
    #[error("credentials error: {0}")]
    Credentials(#[from] aws_credential_types::provider::error::CredentialsError),
}

impl From<Error> for essnap_snapshot::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    essnap_snapshot::Error::transport_failure()
                        .with_message("request timed out")
                        .with_source(e)
                } else if e.is_connect() {
                    essnap_snapshot::Error::transport_failure()
                        .with_message("connection failed")
                        .with_source(e)
                } else {
                    let message = e.to_string();
                    essnap_snapshot::Error::transport_failure()
                        .with_message(message)
                        .with_source(e)
                }
            }
            Error::Http(e) => {
                let message = e.to_string();
                essnap_snapshot::Error::invalid_argument()
                    .with_message(message)
                    .with_source(e)
            }
            Error::Url(e) => {
                let message = e.to_string();
                essnap_snapshot::Error::invalid_argument()
                    .with_message(message)
                    .with_source(e)
            }
            Error::Sign(e) => {
                let message = e.to_string();
                essnap_snapshot::Error::transport_failure()
                    .with_message(format!("failed to sign request: {message}"))
                    .with_source(e)
            }
            Error::SignParams(e) => {
                let message = e.to_string();
                essnap_snapshot::Error::transport_failure()
                    .with_message(format!("failed to sign request: {message}"))
                    .with_source(e)
            }
            Error::Credentials(e) => {
                let message = e.to_string();
                essnap_snapshot::Error::missing_credentials()
                    .with_message(message)
                    .with_source(e)
            }
        }
    }
}
