//! SigV4 request signing bound to the Elasticsearch service.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;

use crate::error::Result;

/// Service name used in the SigV4 credential scope.
pub const SIGNING_SERVICE: &str = "es";

/// Signs `request` in place with SigV4 for the `es` service.
///
/// Canonicalizes the request as it stands, so every header that must be
/// covered by the signature (Host, Content-Type) has to be set before
/// calling this. The derived `Authorization` and `X-Amz-Date` headers are
/// attached to the request afterwards.
pub fn sign_request(
    request: &mut http::Request<Vec<u8>>,
    credentials: &Credentials,
    region: &str,
    time: SystemTime,
) -> Result<()> {
    let identity: Identity = credentials.clone().into();
    let params = v4::SigningParams::builder()
        .identity(&identity)
        .region(region)
        .name(SIGNING_SERVICE)
        .time(time)
        .settings(SigningSettings::default())
        .build()?;

    let signable = SignableRequest::new(
        request.method().as_str(),
        request.uri().to_string(),
        request
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value))),
        SignableBody::Bytes(request.body()),
    )?;

    let params = params.into();
    let (instructions, _signature) = sign(signable, &params)?.into_parts();
    instructions.apply_to_request_http1x(request);

    Ok(())
}
