//! HTTP Basic authorization header values.
//!
//! Builds and parses `Authorization: Basic <token>` values, where the token is
//! the standard base64 encoding of `username:password`.
//!
//! # Example
//!
//! ```
//! use rialto_basic_auth::{parse_authorization_header, Credentials};
//!
//! let credentials = Credentials::new("Aladdin", "open sesame");
//! let header = credentials.authorization_header();
//! assert_eq!(header, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
//!
//! let parsed = parse_authorization_header(&header).unwrap();
//! assert_eq!(parsed, credentials);
//! ```

use rialto_base64::Base64Error;
use thiserror::Error;

pub mod credentials;
pub use credentials::Credentials;

pub mod header;
pub use header::{parse_authorization_header, AUTHORIZATION, BASIC_PREFIX, BASIC_SCHEME};

/// Errors that can occur when parsing a Basic authorization value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasicAuthError {
    #[error("authorization value does not use the Basic scheme")]
    MissingScheme,
    #[error("authorization value has no credentials token")]
    EmptyToken,
    #[error("invalid credentials token: {0}")]
    Decode(#[from] Base64Error),
    #[error("decoded credentials are not valid UTF-8")]
    InvalidUtf8,
    #[error("decoded credentials have no ':' separator")]
    MissingSeparator,
}
