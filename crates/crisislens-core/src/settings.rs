//! Settings domain types and validation.
//!
//! Values come from the process environment (after `.env` loading in the
//! binary); CLI flags override them at the composition root.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Default port for the web server.
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address for the web server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Default server the `analyze` command submits to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable names.
pub mod env_keys {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const HOST: &str = "CRISISLENS_HOST";
    pub const PORT: &str = "CRISISLENS_PORT";
    pub const STATIC_DIR: &str = "CRISISLENS_STATIC_DIR";
    pub const SERVER_URL: &str = "CRISISLENS_SERVER_URL";
    pub const CORS_ORIGINS: &str = "CRISISLENS_CORS_ORIGINS";
}

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid port '{0}': expected a number between 1 and 65535")]
    InvalidPort(String),

    #[error("Model name must not be empty")]
    EmptyModel,

    #[error("Server URL must start with http:// or https://: {0}")]
    InvalidServerUrl(String),
}

/// Settings as found in the environment, before parsing or validation.
///
/// Blank values count as unset. Callers merge command-line flags into this
/// and then convert with [`RawSettings::into_server_settings`] or
/// [`RawSettings::into_client_settings`], which only check the fields that
/// side uses.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub server_url: Option<String>,
    /// Allowed CORS origins, split on commas.
    pub cors_origins: Vec<String>,
}

impl fmt::Debug for RawSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSettings")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("server_url", &self.server_url)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl RawSettings {
    /// Read raw values from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read raw values through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            gemini_api_key: get(env_keys::GEMINI_API_KEY),
            gemini_model: get(env_keys::GEMINI_MODEL),
            host: get(env_keys::HOST),
            port: get(env_keys::PORT),
            static_dir: get(env_keys::STATIC_DIR).map(PathBuf::from),
            server_url: get(env_keys::SERVER_URL),
            cors_origins: get(env_keys::CORS_ORIGINS)
                .as_deref()
                .map(parse_origins)
                .unwrap_or_default(),
        }
    }

    /// Settings for running the web server. The client URL is not checked.
    pub fn into_server_settings(self) -> Result<Settings, SettingsError> {
        let defaults = Settings::default();
        let port = match self.port.as_deref() {
            Some(raw) => parse_port(raw)?,
            None => defaults.port,
        };
        let settings = Settings {
            gemini_api_key: self.gemini_api_key,
            gemini_model: self.gemini_model.unwrap_or(defaults.gemini_model),
            host: self.host.unwrap_or(defaults.host),
            port,
            static_dir: self.static_dir,
            server_url: defaults.server_url,
            cors_origins: self.cors_origins,
        };
        settings.validate_server()?;
        Ok(settings)
    }

    /// Settings for submitting to a server. Only the server URL is checked;
    /// server-side fields keep their defaults.
    pub fn into_client_settings(self) -> Result<Settings, SettingsError> {
        let defaults = Settings::default();
        let settings = Settings {
            server_url: self.server_url.unwrap_or(defaults.server_url),
            ..defaults
        };
        settings.validate_client()?;
        Ok(settings)
    }
}

/// Application settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Gemini API key; `None` leaves the analysis endpoint unavailable.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub host: String,
    pub port: u16,
    /// Directory with `index.html` and assets served under `/static`.
    pub static_dir: Option<PathBuf>,
    /// Base URL used by the `analyze` client.
    pub server_url: String,
    /// Origins allowed by CORS; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

// Keep the API key out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("server_url", &self.server_url)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl Settings {
    /// Check everything the web server relies on.
    pub fn validate_server(&self) -> Result<(), SettingsError> {
        if self.port == 0 {
            return Err(SettingsError::InvalidPort("0".to_string()));
        }
        if self.gemini_model.trim().is_empty() {
            return Err(SettingsError::EmptyModel);
        }
        Ok(())
    }

    /// Check everything the `analyze` client relies on.
    pub fn validate_client(&self) -> Result<(), SettingsError> {
        if self.server_url.starts_with("http://") || self.server_url.starts_with("https://") {
            Ok(())
        } else {
            Err(SettingsError::InvalidServerUrl(self.server_url.clone()))
        }
    }

    /// Why the analysis endpoint cannot work with these settings, if it cannot.
    pub fn missing_model_reason(&self) -> Option<&'static str> {
        match self.gemini_api_key {
            Some(_) => None,
            None => Some("GEMINI_API_KEY is not set. Add it to your environment or .env file."),
        }
    }

    /// `host:port` for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, SettingsError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(SettingsError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
