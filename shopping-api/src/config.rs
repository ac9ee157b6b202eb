/// Configuration management for the API server
///
/// Configuration comes from environment variables, with a `.env` file
/// loaded first when present.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma separated allowed origins, `*` for any
///   (default: http://localhost:5173)
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `TOKEN_SYMMETRIC_KEY`: HS256 signing key, at least 32 characters (required)
/// - `ACCESS_TOKEN_DURATION_MINUTES`: Access token lifetime (default: 15)
/// - `RUST_LOG`: Log filter
/// - `LOG_FORMAT`: `json` for JSON logs, anything else for plain text
///
/// # Example
///
/// ```no_run
/// use shopping_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Minimum length of the token signing key
pub const MIN_SYMMETRIC_KEY_LEN: usize = 32;

/// Upper bound on the access token lifetime (30 days)
pub const MAX_ACCESS_TOKEN_DURATION_MINUTES: i64 = 30 * 24 * 60;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token configuration
    pub token: TokenConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins (`*` = any)
    pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Symmetric key for HS256 signing
    pub symmetric_key: String,

    /// Access token lifetime in minutes
    pub access_token_duration_minutes: i64,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is
    /// invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()?;
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()?;

        let symmetric_key = lookup("TOKEN_SYMMETRIC_KEY").ok_or_else(|| {
            anyhow::anyhow!("TOKEN_SYMMETRIC_KEY environment variable is required")
        })?;
        if symmetric_key.len() < MIN_SYMMETRIC_KEY_LEN {
            anyhow::bail!(
                "TOKEN_SYMMETRIC_KEY must be at least {} characters long",
                MIN_SYMMETRIC_KEY_LEN
            );
        }

        let access_token_duration_minutes = lookup("ACCESS_TOKEN_DURATION_MINUTES")
            .unwrap_or_else(|| "15".to_string())
            .parse::<i64>()?;
        if !(1..=MAX_ACCESS_TOKEN_DURATION_MINUTES).contains(&access_token_duration_minutes) {
            anyhow::bail!(
                "ACCESS_TOKEN_DURATION_MINUTES must be between 1 and {}",
                MAX_ACCESS_TOKEN_DURATION_MINUTES
            );
        }

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            token: TokenConfig {
                symmetric_key,
                access_token_duration_minutes,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Returns the access token lifetime
    pub fn access_token_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token.access_token_duration_minutes)
    }
}
