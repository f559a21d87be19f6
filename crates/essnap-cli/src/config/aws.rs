//! AWS credential and region configuration.

use clap::Args;
use essnap_reqwest::SigningConfig;

/// AWS authentication and region options.
///
/// Credentials are picked in order: explicit key pair, then named profile,
/// then the default provider chain.
#[derive(Debug, Clone, Args)]
pub struct AwsConfig {
    /// AWS region to sign requests for
    #[arg(long = "region", visible_alias = "aws-region", env = "AWS_REGION")]
    pub region: String,

    /// AWS access key used to sign the requests
    #[arg(
        long = "aws-access-key",
        env = "AWS_ACCESS_KEY_ID",
        requires = "secret_key"
    )]
    pub access_key: Option<String>,

    /// AWS secret key used to sign the requests
    #[arg(
        long = "aws-secret-key",
        env = "AWS_SECRET_ACCESS_KEY",
        requires = "access_key",
        hide_env_values = true
    )]
    pub secret_key: Option<String>,

    /// Profile from the AWS credentials file to authenticate with
    #[arg(long = "profile", env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

impl AwsConfig {
    /// Resolves these options into a signing configuration.
    pub fn signing_config(&self) -> SigningConfig {
        if let (Some(access_key), Some(secret_key)) = (&self.access_key, &self.secret_key) {
            SigningConfig::with_static_keys(
                self.region.clone(),
                access_key.clone(),
                secret_key.clone(),
            )
        } else if let Some(profile) = &self.profile {
            SigningConfig::with_profile(self.region.clone(), profile.clone())
        } else {
            SigningConfig::with_default_chain(self.region.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use essnap_reqwest::CredentialSource;

    use super::*;

    fn config() -> AwsConfig {
        AwsConfig {
            region: "eu-west-1".to_owned(),
            access_key: None,
            secret_key: None,
            profile: None,
        }
    }

    #[test]
    fn test_key_pair_takes_precedence_over_profile() {
        let config = AwsConfig {
            access_key: Some("AKIDEXAMPLE".to_owned()),
            secret_key: Some("secret".to_owned()),
            profile: Some("production".to_owned()),
            ..config()
        };

        let signing = config.signing_config();
        assert_eq!(signing.region, "eu-west-1");
        assert!(matches!(signing.source, CredentialSource::Static { .. }));
    }

    #[test]
    fn test_profile_selected_without_keys() {
        let config = AwsConfig {
            profile: Some("production".to_owned()),
            ..config()
        };

        assert_eq!(
            config.signing_config().source,
            CredentialSource::Profile("production".to_owned())
        );
    }

    #[test]
    fn test_default_chain_when_nothing_given() {
        assert_eq!(
            config().signing_config().source,
            CredentialSource::DefaultChain
        );
    }
}
