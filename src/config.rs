// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{Result, SynergyError};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RESUME_PATH: &str = "assets/infosys.docx";
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

/// Where the Gemini credential comes from.
///
/// The environment variant is resolved on every request, so a key exported
/// after startup is picked up without a restart.
#[derive(Clone)]
pub enum ApiKeySource {
    Env(String),
    Fixed(Option<String>),
}

impl ApiKeySource {
    /// Returns the credential, treating an empty value as absent.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => key.clone(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    /// Name reported when the credential is missing.
    pub fn describe(&self) -> String {
        match self {
            ApiKeySource::Env(var) => var.clone(),
            ApiKeySource::Fixed(_) => API_KEY_VAR.to_string(),
        }
    }
}

impl std::fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKeySource::Fixed(key) => f
                .debug_tuple("Fixed")
                .field(&key.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: ApiKeySource,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub resume_path: PathBuf,
    pub session_ttl: Duration,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// A missing `GEMINI_API_KEY` is not an error here: the synergy check
    /// reports it per request instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let host = lookup("PORTFOLIO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORTFOLIO_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                SynergyError::Config(format!("PORTFOLIO_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };
        let resume_path = PathBuf::from(
            lookup("PORTFOLIO_RESUME_PATH").unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string()),
        );
        let ttl_secs = match lookup("PORTFOLIO_SESSION_TTL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                SynergyError::Config(format!(
                    "PORTFOLIO_SESSION_TTL_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_SESSION_TTL_SECS,
        };
        if ttl_secs == 0 {
            return Err(SynergyError::Config(
                "PORTFOLIO_SESSION_TTL_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(AppConfig {
            gemini: GeminiConfig {
                api_base,
                model,
                api_key: ApiKeySource::Env(API_KEY_VAR.to_string()),
            },
            server: ServerConfig {
                host,
                port,
                resume_path,
                session_ttl: Duration::from_secs(ttl_secs),
            },
        })
    }
}
