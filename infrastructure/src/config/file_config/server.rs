//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// HTTP listener settings
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:8080"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse `bind` into a socket address
    pub fn parse_bind(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default_bind_parses() {
        let addr = FileServerConfig::default().parse_bind().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_server_invalid_bind() {
        let config = FileServerConfig {
            bind: "localhost".to_string(),
        };
        assert!(config.parse_bind().is_none());
    }
}
