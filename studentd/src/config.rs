//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or the `STUDENTD_CONFIG` environment variable.
//!
//! ## Loading Priority
//!
//! Sources are merged in order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `STUDENTD_`; use
//!    double underscores for nested values, e.g. `STUDENTD_DATABASE__URL`
//! 3. **MONGO_STRING** - Special case: overrides `database.url` if set
//!
//! The connection string is the only required value. It is read once at
//! startup; a missing or empty value is a fatal error, with no lazy or
//! retried connection.

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "STUDENTD_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Flat override for `database.url`, fed by the `MONGO_STRING`
    /// environment variable. Consumed during [`Config::load`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    /// Document store connection settings
    pub database: DatabaseConfig,
}

/// Document store connection settings. The database name and collection name
/// are fixed by the service; only the endpoint is configurable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// MongoDB connection string (e.g., "mongodb://localhost:27017")
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
            database_url: None,
            database: DatabaseConfig::default(),
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let mut config: Self = Self::figment(args).extract()?;

        // if a flat connection string override is set, it wins
        if let Some(url) = config.database_url.take() {
            config.database.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("STUDENTD_").split("__"))
            // Common MONGO_STRING pattern from deployment environments
            .merge(Env::raw().only(&["MONGO_STRING"]).map(|_| "database_url".into()))
    }

    /// Validate the configuration for required fields
    fn validate(&self) -> Result<(), figment::Error> {
        if self.database.url.trim().is_empty() {
            return Err(figment::Error::from(
                "database.url is not set. Provide it in the config file or via the MONGO_STRING environment variable.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
