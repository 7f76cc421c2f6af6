// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, UnispaceError};

/// Largest PDF accepted for extraction (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Uploads larger than this are rejected before extraction starts.
    pub max_upload_bytes: u64,
    /// Deadline for a single PDF extraction, in seconds.
    pub extraction_timeout_secs: u64,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            extraction_timeout_secs: 30,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error rather than a silent reset.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let config: Self = serde_json::from_str(&data)
            .map_err(|err| UnispaceError::Config(format!("{}: {}", path.display(), err)))?;
        config.validate()?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(UnispaceError::Config(
                "max_upload_bytes must be greater than zero".into(),
            ));
        }
        if self.extraction_timeout_secs == 0 {
            return Err(UnispaceError::Config(
                "extraction_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            extraction_timeout_secs: 5,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "log_filter": "debug" }"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.extraction_timeout_secs, 30);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(UnispaceError::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "extraction_timeout_secs": 0 }"#).unwrap();
        assert!(matches!(AppConfig::load(&path), Err(UnispaceError::Config(_))));
    }
}
