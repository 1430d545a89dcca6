//! Client configuration from environment variables (optionally via `.env`).

use anyhow::{Context, Result};
use getdpd_api::ClientConfig;

pub const PARTNER_NAME_VAR: &str = "DPD_PARTNER_NAME";
pub const PARTNER_TOKEN_VAR: &str = "DPD_PARTNER_TOKEN";
pub const USERNAME_VAR: &str = "DPD_USERNAME";
pub const PASSWORD_VAR: &str = "DPD_PASSWORD";
pub const LANGUAGE_VAR: &str = "DPD_LANGUAGE";

/// Reads the client configuration from the process environment.
pub fn from_env() -> Result<ClientConfig> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Builds the configuration from any variable source. Required variables
/// that are missing produce an error naming the variable.
pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str| {
        lookup(name).with_context(|| format!("environment variable {} is not set", name))
    };

    let config = ClientConfig::new(
        required(PARTNER_NAME_VAR)?,
        required(PARTNER_TOKEN_VAR)?,
        required(USERNAME_VAR)?,
        required(PASSWORD_VAR)?,
    );
    Ok(match lookup(LANGUAGE_VAR).filter(|l| !l.is_empty()) {
        Some(language) => config.with_language(language),
        None => config,
    })
}
