/// Configuration management for the portfolio server
///
/// Handles server binding and the storage connection. Built once at process
/// start and passed explicitly into the server factory.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Persistent storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Where and how to reach the record store
    /// (e.g. "sqlite://portfolio.db", "sqlite::memory:")
    pub connection_string: String,
    /// Upper bound on pooled connections.
    /// In-memory databases must use 1, every connection gets its own database.
    pub max_connections: u32,
}

impl Config {
    /// Configuration for a private in-memory store, used by tests and demos
    pub fn in_memory() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                connection_string: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        }
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("PORTFOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORTFOLIO_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            database: DatabaseConfig {
                connection_string: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://portfolio.db".to_string()),
                max_connections: std::env::var("PORTFOLIO_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_config_uses_single_connection() {
        let config = Config::in_memory();
        assert_eq!(config.database.connection_string, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
    }
}
