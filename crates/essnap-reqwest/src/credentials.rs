//! AWS credential resolution for request signing.
//!
//! Credentials are resolved once per invocation at the boundary and handed
//! to the signer, instead of being looked up from ambient module state.

use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;

use crate::error::Result;

/// Where signing credentials come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Explicit access key / secret key pair.
    Static {
        access_key: String,
        secret_key: String,
    },
    /// Named profile from the shared AWS credentials file.
    Profile(String),
    /// The default provider chain (environment, shared config, IMDS).
    DefaultChain,
}

/// Region and credential source used to sign outbound requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// AWS region for the credential scope.
    pub region: String,
    /// Credential source to resolve before signing.
    pub source: CredentialSource,
}

impl SigningConfig {
    /// Creates a signing config for the given region and source.
    pub fn new(region: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            region: region.into(),
            source,
        }
    }

    /// Creates a signing config with an explicit key pair.
    pub fn with_static_keys(
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self::new(
            region,
            CredentialSource::Static {
                access_key: access_key.into(),
                secret_key: secret_key.into(),
            },
        )
    }

    /// Creates a signing config backed by a named credential profile.
    pub fn with_profile(region: impl Into<String>, profile: impl Into<String>) -> Self {
        Self::new(region, CredentialSource::Profile(profile.into()))
    }

    /// Creates a signing config backed by the default provider chain.
    pub fn with_default_chain(region: impl Into<String>) -> Self {
        Self::new(region, CredentialSource::DefaultChain)
    }

    /// Resolves the source into concrete credentials.
    pub async fn resolve_credentials(&self) -> Result<Credentials> {
        match &self.source {
            CredentialSource::Static {
                access_key,
                secret_key,
            } => Ok(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "essnap-static",
            )),
            CredentialSource::Profile(name) => {
                let provider = ProfileFileCredentialsProvider::builder()
                    .profile_name(name)
                    .build();
                Ok(provider.provide_credentials().await?)
            }
            CredentialSource::DefaultChain => {
                let provider = DefaultCredentialsChain::builder()
                    .region(aws_config::Region::new(self.region.clone()))
                    .build()
                    .await;
                Ok(provider.provide_credentials().await?)
            }
        }
    }
}
