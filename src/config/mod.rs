use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::transport::DEFAULT_TIMEOUT_SECS;

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Settings for the `regionlookup` binary. The library never reads these.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub lookup_url: Option<String>,
    #[serde(default)]
    pub search_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Default language for identifiers and search values.
    #[serde(default)]
    pub language: Option<String>,
    /// Default region code for identifiers and search values.
    #[serde(default)]
    pub region_code: Option<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            lookup_url: None,
            search_url: None,
            timeout_secs: default_timeout_secs(),
            language: None,
            region_code: None,
        }
    }
}

impl FileConfig {
    /// First parseable config file from the standard search paths.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match parse(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded config file");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file. Missing or invalid files are
    /// errors here, unlike [`FileConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        parse(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// API key precedence: explicit value, then environment, then this file.
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Option<String> {
        self.resolve_api_key_with(explicit, std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_with(&self, explicit: Option<String>, env: Option<String>) -> Option<String> {
        explicit
            .or_else(|| env.filter(|k| !k.is_empty()))
            .or_else(|| self.api_key.clone())
    }
}

fn parse(contents: &str) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(contents)?;
    if config.timeout_secs == 0 {
        bail!("timeout_secs must be greater than 0");
    }
    Ok(config)
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("regionlookup.toml"));
    paths.push(PathBuf::from(".regionlookup.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("regionlookup").join("config.toml"));
        paths.push(config_dir.join("regionlookup.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".regionlookup.toml"));
    }

    paths
}
