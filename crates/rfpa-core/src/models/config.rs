//! Configuration structures for the analyzer service.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::validation::ALLOWED_EXTENSIONS;

/// Main configuration for the rfpa service.
///
/// Built once at startup (defaults, then the optional JSON file, then the
/// environment) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Upload handling configuration.
    pub upload: UploadConfig,

    /// Analysis store configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Verbose request logging.
    pub debug: bool,

    /// Secret used to sign flash-message cookies.
    pub secret_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
            secret_key: "change-this-secret-key-in-production".to_string(),
        }
    }
}

/// Upload handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory uploaded files are written to.
    pub upload_folder: PathBuf,

    /// Maximum request body size in bytes.
    pub max_content_length: usize,

    /// Accepted file extensions (lowercase, without the dot).
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            upload_folder: PathBuf::from("uploads"),
            max_content_length: 16 * 1024 * 1024,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// Analysis store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Number of analyses listed on the index page.
    pub recent_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("rfp_analysis.db"),
            recent_limit: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override fields from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Override fields from an arbitrary variable lookup (useful for testing).
    ///
    /// Recognised variables: `HOST`, `PORT`, `FLASK_DEBUG` or `DEBUG`,
    /// `SECRET_KEY`, `UPLOAD_FOLDER`, `MAX_CONTENT_LENGTH`, `DATABASE_PATH`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(debug) = lookup("FLASK_DEBUG").or_else(|| lookup("DEBUG")) {
            self.server.debug = parse_bool("DEBUG", &debug)?;
        }
        if let Some(secret) = lookup("SECRET_KEY") {
            self.server.secret_key = secret;
        }
        if let Some(folder) = lookup("UPLOAD_FOLDER") {
            self.upload.upload_folder = PathBuf::from(folder);
        }
        if let Some(limit) = lookup("MAX_CONTENT_LENGTH") {
            self.upload.max_content_length = parse_env("MAX_CONTENT_LENGTH", &limit)?;
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            self.storage.database_path = PathBuf::from(path);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
