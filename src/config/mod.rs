//! Configuration loading and management
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. a YAML file named by `APP_CONFIG_FILE`, if set
//! 3. a `.env` file in the working directory, if present
//! 4. process environment
//!
//! Empty environment values are ignored, so `PORT=` keeps the default port.

use crate::core::error::ConfigError;
use crate::core::validation::MessageTemplates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable naming an optional YAML config file
pub const CONFIG_FILE_VAR: &str = "APP_CONFIG_FILE";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("expected 'json' or 'pretty', got '{}'", other)),
        }
    }
}

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 25,
            min_connections: 25,
            max_lifetime_secs: 300,
        }
    }
}

/// Complete service configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub app_env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub database: PoolConfig,
    pub messages: MessageTemplates,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: String::new(),
            app_env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            database: PoolConfig::default(),
            messages: MessageTemplates::default(),
        }
    }
}

impl AppConfig {
    /// Load from `.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_FILE_VAR).filter(|v| !v.is_empty()) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        base.with_overrides(lookup)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides on top of `self`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get("PORT") {
            self.port = parse("PORT", &v)?;
        }
        if let Some(v) = get("DATABASE_URL") {
            self.database_url = v;
        }
        if let Some(v) = get("APP_ENV") {
            self.app_env = v;
        }
        if let Some(v) = get("LOG_LEVEL") {
            self.log_level = v;
        }
        if let Some(v) = get("LOG_FORMAT") {
            self.log_format = parse("LOG_FORMAT", &v)?;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            self.database.max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("DB_MIN_CONNECTIONS") {
            self.database.min_connections = parse("DB_MIN_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("DB_MAX_LIFETIME_SECS") {
            self.database.max_lifetime_secs = parse("DB_MAX_LIFETIME_SECS", &v)?;
        }

        // The idle target never exceeds the pool size.
        self.database.min_connections = self
            .database
            .min_connections
            .min(self.database.max_connections);

        Ok(self)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// The database URL, which the server cannot start without
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        let url = self.database_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "DATABASE_URL".to_string(),
            });
        }
        Ok(url)
    }

    /// Log settings that are missing but not fatal at load time
    pub fn warn_if_incomplete(&self) {
        if self.database_url.is_empty() {
            tracing::warn!("DATABASE_URL is empty");
        }
    }
}

// The database URL usually carries credentials.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &redact(&self.database_url))
            .field("app_env", &self.app_env)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("database", &self.database)
            .finish()
    }
}

fn redact(url: &str) -> String {
    let Some(at) = url.rfind('@') else {
        return url.to_string();
    };
    let start = url
        .find("://")
        .map(|i| i + 3)
        .filter(|&i| i <= at)
        .unwrap_or(0);

    format!("{}***{}", &url[..start], &url[at..])
}

fn parse<T>(field: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}
