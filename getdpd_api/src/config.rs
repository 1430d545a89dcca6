//! Client configuration: credentials, API version, and default language.

use std::fmt;

/// Root of the DPD REST API. Every request path is resolved against it.
pub const BASE_URL: &str = "https://api.getdpd.com/v2/";

/// API version targeted by [`BASE_URL`].
pub const API_VERSION: &str = "v2";

/// Language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "fr_FR";

/// Immutable client configuration, set once when the client is built.
///
/// Credentials are opaque strings and are never validated locally; a bad
/// username/password pair surfaces as [`crate::Error::Unauthorized`] on the
/// first call. Only the account username/password are sent (as HTTP basic
/// auth). The partner name/token are kept for callers that need them but are
/// not attached to requests.
#[derive(Clone)]
pub struct ClientConfig {
    partner_name: String,
    partner_token: String,
    username: String,
    password: String,
    api_version: String,
    language: String,
}

impl ClientConfig {
    /// Creates a configuration with the default language.
    pub fn new(
        partner_name: impl Into<String>,
        partner_token: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            partner_name: partner_name.into(),
            partner_token: partner_token.into(),
            username: username.into(),
            password: password.into(),
            api_version: API_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Overrides the default language (e.g. `en_US`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    pub fn partner_token(&self) -> &str {
        &self.partner_token
    }

    /// Account username, sent as the basic auth user.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password, sent as the basic auth password.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("partner_name", &self.partner_name)
            .field("partner_token", &"***")
            .field("username", &self.username)
            .field("password", &"***")
            .field("api_version", &self.api_version)
            .field("language", &self.language)
            .finish()
    }
}
