use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Signing secret and fixed lifetime of access tokens.
#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Upper bound on the token lifetime: one year.
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

fn default_max_connections() -> u32 {
    5
}

impl TokenConfig {
    /// Token lifetime, checked to lie in `1..=MAX_TOKEN_TTL_SECONDS`.
    pub fn ttl(&self) -> Result<chrono::Duration, ConfigError> {
        if !(1..=MAX_TOKEN_TTL_SECONDS).contains(&self.ttl_seconds) {
            return Err(ConfigError::Message(format!(
                "token.ttl_seconds must be between 1 and {}, got {}",
                MAX_TOKEN_TTL_SECONDS, self.ttl_seconds
            )));
        }

        chrono::Duration::try_seconds(self.ttl_seconds).ok_or_else(|| {
            ConfigError::Message("token.ttl_seconds is out of range".to_string())
        })
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: TOKEN__TTL_SECONDS=3600 overrides token.ttl_seconds
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.token.ttl()?;

        Ok(config)
    }
}
