use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VigilError, VigilResult};

mod defaults {
    pub const ENDPOINT_URL: &str = "http://127.0.0.1:8501/v1/classify";
    pub const BIND_ADDR: &str = "127.0.0.1:8080";
    pub const DB_PATH: &str = "vigil_audit.db";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Runtime configuration for the relay process.
///
/// Resolution order: built-in defaults, then an optional TOML file,
/// then `VIGIL_*` environment variables on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// URL of the remote classification endpoint.
    pub endpoint_url: String,
    /// Address the HTTP ingress binds to.
    pub bind_addr: String,
    /// Path to the SQLite audit database.
    pub db_path: String,
    /// Timeout applied to classifier calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint_url: defaults::ENDPOINT_URL.to_string(),
            bind_addr: defaults::BIND_ADDR.to_string(),
            db_path: defaults::DB_PATH.to_string(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RelayConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> VigilResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| VigilError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| VigilError::Config {
            reason: format!("failed to parse {}: {e}", path.display()),
        })
    }

    /// Build from the environment alone.
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// Overlay `VIGIL_*` environment variables on this config. Unset or
    /// unparseable variables leave the existing value in place.
    pub fn overlay_env(mut self) -> Self {
        if let Ok(v) = std::env::var("VIGIL_ENDPOINT_URL") {
            self.endpoint_url = v;
        }
        if let Ok(v) = std::env::var("VIGIL_HTTP_BIND") {
            self.bind_addr = v;
        }
        if let Ok(v) = std::env::var("VIGIL_DB_PATH") {
            self.db_path = v;
        }
        if let Ok(v) = std::env::var("VIGIL_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = v.trim().parse::<u64>() {
                self.request_timeout_secs = secs;
            }
        }
        self
    }

    /// Startup sanity check.
    pub fn validate(&self) -> VigilResult<()> {
        if self.endpoint_url.trim().is_empty() {
            return Err(VigilError::Config {
                reason: "endpoint_url must not be empty".to_string(),
            });
        }
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(VigilError::Config {
                reason: format!("bind_addr '{}' is not a valid socket address", self.bind_addr),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        RelayConfig::default().validate().unwrap();
    }

    #[test]
    fn toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint_url = \"http://model.internal/classify\"").unwrap();
        let config = RelayConfig::load(file.path()).unwrap();
        assert_eq!(config.endpoint_url, "http://model.internal/classify");
        // Unset keys keep their defaults.
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn bad_bind_addr_rejected() {
        let config = RelayConfig {
            bind_addr: "not-an-addr".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
