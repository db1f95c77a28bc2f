//! Access key resolution.
//!
//! The key is resolved once at startup. A missing key is not an error: the
//! request goes out with an empty `client_id` and the API rejects it.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where the resolved access key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CommandLine,
    Environment,
    ConfigFile,
    Missing,
}

/// Resolve the access key with precedence: CLI flag, environment, config file.
///
/// `env_lookup` is injected so tests don't touch the process environment.
pub fn resolve_access_key<F>(
    cli_key: Option<&str>,
    api: &ApiConfig,
    env_lookup: F,
) -> (SecureString, CredentialSource)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = cli_key.filter(|k| !k.is_empty()) {
        return (SecureString::new(key.to_string()), CredentialSource::CommandLine);
    }

    if let Some(key) = env_lookup(&api.access_key_env).filter(|k| !k.is_empty()) {
        return (SecureString::new(key), CredentialSource::Environment);
    }

    match api.access_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => (SecureString::new(key.to_string()), CredentialSource::ConfigFile),
        None => (SecureString::default(), CredentialSource::Missing),
    }
}
