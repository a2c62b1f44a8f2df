// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests, throwaway demos)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a connection string
    ///
    /// Anything without a recognized scheme is treated as a `SQLite` file path.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:"));
        match path {
            Some(":memory:") => Self::Memory,
            Some(path) => Self::SQLite {
                path: PathBuf::from(path),
            },
            None => Self::SQLite {
                path: PathBuf::from(s),
            },
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Page generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Seconds after which a generated page is regenerated on the next request
    pub revalidate_secs: u64,
    /// Pre-generate the list page and every known detail page at startup
    pub prerender_on_startup: bool,
    /// Most snapshots each page cache keeps before evicting the least recently used
    pub max_cached_pages: usize,
}

impl PagesConfig {
    /// Revalidation window as a `Duration`
    #[must_use]
    pub const fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            revalidate_secs: defaults::PAGE_REVALIDATE_SECS,
            prerender_on_startup: true,
            max_cached_pages: defaults::PAGE_CACHE_MAX_ENTRIES,
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Store location
    pub database_url: DatabaseUrl,
    /// Page generation settings
    pub pages: PagesConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database_url: DatabaseUrl::default(),
            pages: PagesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        let config = Self {
            http_port: env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or(env_config::HOST, defaults::HOST),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::LOG_LEVEL, "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            database_url: DatabaseUrl::parse_url(&env_var_or(
                env_config::DATABASE_URL,
                defaults::DATABASE_URL,
            )),
            pages: PagesConfig {
                revalidate_secs: env_var_or(
                    env_config::PAGE_REVALIDATE_SECS,
                    &defaults::PAGE_REVALIDATE_SECS.to_string(),
                )
                .parse()
                .context("Invalid PAGE_REVALIDATE_SECS value")?,
                prerender_on_startup: env_var_or(env_config::PRERENDER_ON_STARTUP, "true")
                    .parse()
                    .context("Invalid PRERENDER_ON_STARTUP value")?,
                max_cached_pages: env_var_or(
                    env_config::PAGE_CACHE_MAX_ENTRIES,
                    &defaults::PAGE_CACHE_MAX_ENTRIES.to_string(),
                )
                .parse()
                .context("Invalid PAGE_CACHE_MAX_ENTRIES value")?,
            },
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Catalog Configuration:\n\
             - HTTP: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Page Revalidation: {}s\n\
             - Prerender On Startup: {}\n\
             - Page Cache Capacity: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.database_url,
            self.pages.revalidate_secs,
            self.pages.prerender_on_startup,
            self.pages.max_cached_pages,
        )
    }
}

/// Read an environment variable with a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
