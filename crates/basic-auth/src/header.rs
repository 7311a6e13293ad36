//! Parsing of `Authorization` header values.

use crate::{BasicAuthError, Credentials};

/// Name of the HTTP header carrying credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Authentication scheme name.
pub const BASIC_SCHEME: &str = "Basic";

/// Prefix placed before the encoded credentials.
pub const BASIC_PREFIX: &str = "Basic ";

/// Parses an `Authorization` header value back into credentials.
///
/// The scheme name is matched case-insensitively and may be followed by any
/// number of spaces. The decoded `user:password` is split at the first `':'`,
/// so passwords may themselves contain colons.
///
/// # Example
///
/// ```
/// use rialto_basic_auth::parse_authorization_header;
///
/// let credentials = parse_authorization_header("basic dXNlcjpwOmFzcw==").unwrap();
/// assert_eq!(credentials.username, "user");
/// assert_eq!(credentials.password, "p:ass");
/// ```
pub fn parse_authorization_header(value: &str) -> Result<Credentials, BasicAuthError> {
    parse(value).inspect_err(|err| {
        log::debug!("rejected basic authorization value: {err}");
    })
}

fn parse(value: &str) -> Result<Credentials, BasicAuthError> {
    let value = value.trim();
    let (scheme, token) = match value.split_once(' ') {
        Some((scheme, token)) => (scheme, token.trim_start_matches(' ')),
        None => (value, ""),
    };
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return Err(BasicAuthError::MissingScheme);
    }

    let raw = rialto_base64::decode(token.as_bytes())?.ok_or(BasicAuthError::EmptyToken)?;
    let user_pass = String::from_utf8(raw).map_err(|_| BasicAuthError::InvalidUtf8)?;
    let (username, password) = user_pass
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(Credentials::new(username, password))
}
