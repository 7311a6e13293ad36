//! Username/password pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::header::BASIC_PREFIX;

/// A username and password for HTTP Basic authentication.
///
/// Deserializable so callers can keep it in their own configuration files.
/// The `Debug` output never includes the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The `user:password` form that gets encoded.
    pub fn user_pass(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }

    /// Builds the `Authorization` header value, e.g. `Basic dXNlcjpwYXNz`.
    ///
    /// # Example
    ///
    /// ```
    /// use rialto_basic_auth::Credentials;
    ///
    /// let header = Credentials::new("user", "pass").authorization_header();
    /// assert_eq!(header, "Basic dXNlcjpwYXNz");
    /// ```
    pub fn authorization_header(&self) -> String {
        // user_pass always holds ':' so it is never blank.
        let token = rialto_base64::encode_text(&self.user_pass());
        format!("{BASIC_PREFIX}{token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_still_encode() {
        assert_eq!(Credentials::new("", "").authorization_header(), "Basic Og==");
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
