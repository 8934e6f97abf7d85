use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the certifications API server.
#[derive(Debug)]
pub struct Config {
    /// Shared-secret value expected in the `API_TOKEN` request header.
    pub api_token: String,
    /// Formatting variant served by this process.
    pub variant: Variant,
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
}

/// Formatting variants the server can expose.
///
/// Each deployment serves exactly one variant; the formatting cores for all
/// three are always compiled and exercised by tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Single path-embedded string in, collapsible heading/content record out.
    Collapsible,
    /// JSON array body in, named conversation sections out.
    Sections,
    /// URL-encoded JSON array in, selectable HTML fragment out.
    Dropdown,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_token: load_env("API_TOKEN")?,
            variant: load_env("FORMAT_VARIANT")?
                .parse()
                .map_err(|()| ConfigError::InvalidValue("FORMAT_VARIANT".to_string()))?,
            server_port: load_env_optional("PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("PORT".into()))
                })
                .transpose()?,
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl std::str::FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collapsible" => Ok(Self::Collapsible),
            "sections" => Ok(Self::Sections),
            "dropdown" => Ok(Self::Dropdown),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        variant = ?config.variant,
        server_port = ?config.server_port,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
