//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_TTL_MS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for cache entries set without one
    pub default_ttl_ms: u64,
    /// Directory that also receives a copy of every export, if set
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 60000)
    /// - `EXPORT_DIR` - Directory for exported files (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            default_ttl_ms: lookup("DEFAULT_TTL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl_ms),
            export_dir: lookup("EXPORT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl_ms: DEFAULT_TTL_MS,
            export_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl_ms, 60_000);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_config_from_empty_lookup() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_lookup_values() {
        let vars: HashMap<&str, &str> = [
            ("SERVER_PORT", "8080"),
            ("DEFAULT_TTL_MS", "1500"),
            ("EXPORT_DIR", "/tmp/exports"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.default_ttl_ms, 1500);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_config_ignores_unparseable_values() {
        let config = Config::from_lookup(|name| match name {
            "SERVER_PORT" => Some("not-a-port".to_string()),
            "EXPORT_DIR" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.server_port, 3000);
        assert!(config.export_dir.is_none());
    }
}
