#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod credentials;
mod error;
mod sign;

pub use crate::client::{EsClient, TRACING_TARGET};
pub use crate::config::{DEFAULT_TIMEOUT_SECS, EsClientConfig};
pub use crate::credentials::{CredentialSource, SigningConfig};
pub use crate::error::{Error, Result};
pub use crate::sign::SIGNING_SERVICE;
