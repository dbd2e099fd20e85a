// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Connection configuration.
//!
//! All protocol tunables live here: peer address, retry count, read timeout,
//! and handshake strictness. Values deserialize from TOML with per-field
//! defaults, so a config file only needs the fields it overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Tunables for one receiver connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Peer host; Gqrx listens on loopback by default.
    pub host: String,
    /// Remote-control TCP port.
    pub port: u16,
    /// Attempts per exchange before giving up on a silent peer.
    pub tries: u32,
    /// Bound on each reply-line read, in milliseconds.
    pub read_timeout_ms: u64,
    /// Fail `connect` when the peer's identification is not a Gqrx instance.
    /// With `false` the mismatch is only logged.
    pub strict_handshake: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7356,
            tries: 2,
            read_timeout_ms: 1000,
            strict_handshake: true,
        }
    }
}

impl ConnectionConfig {
    /// Address string for `TcpStream::connect`, bracketing bare IPv6 hosts.
    pub fn connect_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", .0.display())]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config file '{}'", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7356);
        assert_eq!(config.tries, 2);
        assert_eq!(config.read_timeout(), Duration::from_secs(1));
        assert!(config.strict_handshake);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
host = "sdr.local"
port = 7357
"#;

        let config: ConnectionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "sdr.local");
        assert_eq!(config.port, 7357);
        // untouched fields keep their defaults
        assert_eq!(config.tries, 2);
        assert!(config.strict_handshake);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
host = "::1"
port = 7356
tries = 3
read_timeout_ms = 250
strict_handshake = false
"#;

        let config: ConnectionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tries, 3);
        assert_eq!(config.read_timeout(), Duration::from_millis(250));
        assert!(!config.strict_handshake);
    }

    #[test]
    fn test_connect_addr_brackets_ipv6() {
        let config = ConnectionConfig {
            host: "::1".to_string(),
            ..ConnectionConfig::default()
        };
        assert_eq!(config.connect_addr(), "[::1]:7356");

        let config = ConnectionConfig::default();
        assert_eq!(config.connect_addr(), "127.0.0.1:7356");
    }
}
