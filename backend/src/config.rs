//! Server configuration read from the process environment.
//!
//! Values come from real environment variables, optionally seeded from a
//! `.env` file in the working directory. Every variable has a default, so the
//! server starts with no configuration at all.
//!
//! | Variable       | Default     |
//! |----------------|-------------|
//! | `HOST`         | `127.0.0.1` |
//! | `PORT`         | `8080`      |
//! | `CONTENT_PATH` | embedded    |
//! | `CORS_ORIGINS` | `*`         |
//! | `OPEN_BROWSER` | `true`      |

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("{name} must be one of true/false/1/0/yes/no, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON case study replacing the embedded seed content.
    pub content_path: Option<PathBuf>,
    /// Allowed CORS origins. A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// Open the site in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content_path: None,
            cors_origins: vec!["*".to_string()],
            open_browser: true,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` (if present) and reads the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let open_browser = match get("OPEN_BROWSER") {
            Some(raw) => parse_flag("OPEN_BROWSER", raw)?,
            None => defaults.open_browser,
        };

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            content_path: get("CONTENT_PATH").map(PathBuf::from),
            cors_origins,
            open_browser,
        })
    }

    /// Base URL the server answers on.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_flag(name: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}
