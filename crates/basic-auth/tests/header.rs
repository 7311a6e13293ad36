//! Tests for building and parsing Basic authorization values.

use rialto_base64::Base64Error;
use rialto_basic_auth::{
    parse_authorization_header, BasicAuthError, Credentials, AUTHORIZATION, BASIC_PREFIX,
};

#[test]
fn builds_header_value() {
    let credentials = Credentials::new("svc_account#01", "s3cret!");
    let header = credentials.authorization_header();
    assert!(header.starts_with(BASIC_PREFIX));
    assert_eq!(header, "Basic c3ZjX2FjY291bnQjMDE6czNjcmV0IQ==");
    assert_eq!(AUTHORIZATION, "Authorization");
}

#[test]
fn parses_what_it_builds() {
    for (username, password) in [
        ("user", "pass"),
        ("", "only-password"),
        ("only-user", ""),
        ("user", "with:colons:inside"),
        ("ünïcödé", "pässwörd"),
    ] {
        let credentials = Credentials::new(username, password);
        let parsed = parse_authorization_header(&credentials.authorization_header()).unwrap();
        assert_eq!(parsed, credentials);
    }
}

#[test]
fn rejects_malformed_token() {
    assert_eq!(
        parse_authorization_header("Basic dXNlcjpwYXNz!"),
        Err(BasicAuthError::Decode(Base64Error::InvalidSymbol {
            symbol: b'!',
            position: 12
        }))
    );
    assert_eq!(
        parse_authorization_header("Basic dXNlcjpwYXN"),
        Err(BasicAuthError::Decode(Base64Error::MalformedLength { length: 11 }))
    );
}

#[test]
fn rejects_missing_separator() {
    // "userpass"
    assert_eq!(
        parse_authorization_header("Basic dXNlcnBhc3M="),
        Err(BasicAuthError::MissingSeparator)
    );
}

#[test]
fn rejects_non_utf8_payload() {
    // 0xFF 0xFE 0x3A
    assert_eq!(
        parse_authorization_header("Basic //46"),
        Err(BasicAuthError::InvalidUtf8)
    );
}

#[test]
fn credentials_from_config() {
    let credentials: Credentials =
        serde_json::from_str(r#"{"username": "user", "password": "pass"}"#).unwrap();
    assert_eq!(credentials.authorization_header(), "Basic dXNlcjpwYXNz");

    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json["username"], "user");
}
