//! Endpoint configuration for the classifier front-end.
//!
//! Reads `./classifier.ron` when present; `JOB_CLASSIFIER_ENDPOINT` overrides
//! the base URL from the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use classifier_engine::{ClientSettings, DEFAULT_ENDPOINT_BASE_URL};
use classifier_logging::{classifier_info, classifier_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "classifier.ron";
pub const ENDPOINT_ENV_VAR: &str = "JOB_CLASSIFIER_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub endpoint_base_url: String,
    /// Left unset, the transport default applies.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_base_url: DEFAULT_ENDPOINT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ClassifierConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ClientSettings::with_endpoint(self.endpoint_base_url.clone())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads `{dir}/classifier.ron`, falling back to defaults when it is absent,
/// then applies `endpoint_override` if it is non-blank.
pub fn load_config(
    dir: &Path,
    endpoint_override: Option<String>,
) -> Result<ClassifierConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let mut config = match fs::read_to_string(&path) {
        Ok(text) => ron::from_str::<ClassifierConfig>(&text).map_err(|err| ConfigError::Parse {
            path: path.clone(),
            message: err.to_string(),
        })?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ClassifierConfig::default(),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    if let Some(endpoint) = endpoint_override {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            classifier_warn!("Ignoring blank {} override", ENDPOINT_ENV_VAR);
        } else {
            config.endpoint_base_url = endpoint.to_string();
        }
    }

    classifier_info!("Using classifier endpoint {}", config.endpoint_base_url);
    Ok(config)
}
