mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_access_key, CredentialSource, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoadingConfig, UiConfig};
