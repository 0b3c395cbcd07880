//! Runtime configuration
//!
//! Everything is environment-driven, with workable defaults for local
//! development. Numeric variables that fail to parse are configuration
//! errors at startup, never silently defaulted.

use crate::error::{MtError, MtResult};
use std::path::PathBuf;
use std::time::Duration;

/// Process configuration shared by the CLI and the web server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Lexicon CSV location (`SHIMAORE_MT_DATASET`)
    pub dataset_path: PathBuf,
    /// Where to download the CSV from when it is absent
    /// (`SHIMAORE_MT_DATASET_URL`)
    pub dataset_url: Option<String>,
    /// Base URL of the OPUS-MT inference server (`OPUS_MT_ENDPOINT`)
    pub endpoint: Option<String>,
    /// Per-hop translation timeout (`SHIMAORE_MT_TIMEOUT_SECS`)
    pub hop_timeout: Duration,
    /// Request length cap in characters (`SHIMAORE_MT_MAX_CHARS`)
    pub max_sentence_chars: usize,
    /// Web server bind address (`SHIMAORE_MT_BIND`)
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dataset_path: PathBuf::from("data/lexicon.csv"),
            dataset_url: None,
            endpoint: None,
            hop_timeout: Duration::from_secs(30),
            max_sentence_chars: 1000,
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> MtResult<Self> {
        let mut config = AppConfig::default();

        if let Ok(path) = std::env::var("SHIMAORE_MT_DATASET") {
            config.dataset_path = PathBuf::from(path);
        }
        if let Ok(url) = std::env::var("SHIMAORE_MT_DATASET_URL") {
            config.dataset_url = Some(url);
        }
        if let Ok(endpoint) = std::env::var("OPUS_MT_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }
        if let Ok(secs) = std::env::var("SHIMAORE_MT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                MtError::ConfigError(format!(
                    "SHIMAORE_MT_TIMEOUT_SECS must be an integer, got {:?}",
                    secs
                ))
            })?;
            config.hop_timeout = Duration::from_secs(secs);
        }
        if let Ok(chars) = std::env::var("SHIMAORE_MT_MAX_CHARS") {
            config.max_sentence_chars = chars.parse().map_err(|_| {
                MtError::ConfigError(format!(
                    "SHIMAORE_MT_MAX_CHARS must be an integer, got {:?}",
                    chars
                ))
            })?;
        }
        if let Ok(bind) = std::env::var("SHIMAORE_MT_BIND") {
            config.bind_addr = bind;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from("data/lexicon.csv"));
        assert_eq!(config.dataset_url, None);
        assert_eq!(config.endpoint, None);
        assert_eq!(config.hop_timeout, Duration::from_secs(30));
        assert_eq!(config.max_sentence_chars, 1000);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
    }
}
