//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Resolve listen address, storage paths, limits and logging options.
//!
//! # Invariants
//! - Every variable has a default; only malformed values are errors.
//! - Empty values count as unset.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_QUOTES_FILE: &str = "quotes.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Options consumed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Directory served for paths outside the quote API.
    pub public_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub quotes_file: PathBuf,
    pub create_if_missing: bool,
    pub api: ApiConfig,
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when `None`.
    pub log_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            quotes_file: PathBuf::from(DEFAULT_QUOTES_FILE),
            create_if_missing: false,
            api: ApiConfig::default(),
            log_level: quotebook_core::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|err| format!("invalid PORT `{raw}`: {err}"))?,
            None => defaults.port,
        };
        let create_if_missing = match get("QUOTEBOOK_CREATE_IF_MISSING") {
            Some(raw) => parse_bool("QUOTEBOOK_CREATE_IF_MISSING", &raw)?,
            None => defaults.create_if_missing,
        };
        let max_body_bytes = match get("QUOTEBOOK_MAX_BODY_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|err| format!("invalid QUOTEBOOK_MAX_BODY_BYTES `{raw}`: {err}"))?,
            None => defaults.api.max_body_bytes,
        };

        Ok(Self {
            bind_host: get("QUOTEBOOK_BIND_HOST").unwrap_or(defaults.bind_host),
            port,
            quotes_file: get("QUOTEBOOK_QUOTES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.quotes_file),
            create_if_missing,
            api: ApiConfig {
                public_dir: get("QUOTEBOOK_PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.api.public_dir),
                max_body_bytes,
            },
            log_level: get("QUOTEBOOK_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: get("QUOTEBOOK_LOG_DIR"),
        })
    }

    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.port)
        } else {
            format!("{}:{}", self.bind_host, self.port)
        }
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
        other => Err(format!("invalid {name} `{other}`; expected true|false")),
    }
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.quotes_file, PathBuf::from("quotes.json"));
        assert_eq!(config.api.public_dir, PathBuf::from("public"));
        assert_eq!(config.api.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert!(!config.create_if_missing);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("QUOTEBOOK_BIND_HOST", "::1"),
            ("QUOTEBOOK_QUOTES_FILE", "/srv/quotes.json"),
            ("QUOTEBOOK_PUBLIC_DIR", "/srv/public"),
            ("QUOTEBOOK_CREATE_IF_MISSING", "yes"),
            ("QUOTEBOOK_MAX_BODY_BYTES", "1024"),
            ("QUOTEBOOK_LOG_LEVEL", "warn"),
            ("QUOTEBOOK_LOG_DIR", "/var/log/quotebook"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "[::1]:8081");
        assert_eq!(config.quotes_file, PathBuf::from("/srv/quotes.json"));
        assert_eq!(config.api.public_dir, PathBuf::from("/srv/public"));
        assert!(config.create_if_missing);
        assert_eq!(config.api.max_body_bytes, 1024);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/quotebook"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("PORT", "  "), ("QUOTEBOOK_LOG_DIR", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = config_from(&[("PORT", "70000")]).unwrap_err();
        assert!(err.contains("PORT"));
        let err = config_from(&[("QUOTEBOOK_CREATE_IF_MISSING", "maybe")]).unwrap_err();
        assert!(err.contains("QUOTEBOOK_CREATE_IF_MISSING"));
        assert!(config_from(&[("QUOTEBOOK_MAX_BODY_BYTES", "-1")]).is_err());
    }
}
