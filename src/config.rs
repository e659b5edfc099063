//! Configuration management for wasteboard using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "app/filedati.csv";
/// Default listen address of the query service.
pub const DEFAULT_BACKEND_BIND: &str = "0.0.0.0:8000";
/// Default listen address of the web frontend.
pub const DEFAULT_FRONTEND_BIND: &str = "0.0.0.0:8080";
/// Default URL the frontend uses to reach the query service.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// CSV dataset read by the query service.
    pub dataset_path: PathBuf,
    /// Listen address of the query service.
    pub backend_bind: String,
    /// Listen address of the web frontend.
    pub frontend_bind: String,
    /// Base URL of the query service, as seen by the frontend and CLI.
    pub backend_url: String,
    /// Timeout for calls to the query service, in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            backend_bind: DEFAULT_BACKEND_BIND.to_string(),
            frontend_bind: DEFAULT_FRONTEND_BIND.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: 10,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dataset path (relative paths resolve from the config file location).
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "data")]
    pub dataset_path: Option<String>,
    /// Query service listen address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_bind: Option<String>,
    /// Frontend listen address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_bind: Option<String>,
    /// Query service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers wasteboard config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("wasteboard").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e)),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref dataset) = self.dataset_path {
            settings.dataset_path = self.resolve_path(dataset, base_dir);
        }
        if let Some(ref bind) = self.backend_bind {
            settings.backend_bind = bind.clone();
        }
        if let Some(ref bind) = self.frontend_bind {
            settings.frontend_bind = bind.clone();
        }
        if let Some(ref url) = self.backend_url {
            settings.backend_url = url.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (skips discovery).
    pub config_path: Option<PathBuf>,
}

/// Environment overrides, read once so they can be applied in tests without
/// touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub dataset_path: Option<String>,
    pub backend_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            dataset_path: std::env::var("WASTE_DATASET")
                .ok()
                .filter(|s| !s.is_empty()),
            backend_url: std::env::var("WASTE_BACKEND_URL")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref dataset) = self.dataset_path {
            tracing::debug!("Using WASTE_DATASET from environment: {}", dataset);
            let expanded = shellexpand::tilde(dataset);
            settings.dataset_path = PathBuf::from(expanded.as_ref());
        }
        if let Some(ref url) = self.backend_url {
            tracing::debug!("Using WASTE_BACKEND_URL from environment: {}", url);
            settings.backend_url = url.clone();
        }
    }
}

/// Build settings from a loaded config plus environment overrides.
pub fn settings_from(config: &Config, env: &EnvOverrides) -> Settings {
    let mut settings = Settings::default();

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    config.apply_to_settings(&mut settings, &base_dir);

    // Environment variables take precedence over the config file
    env.apply(&mut settings);
    settings
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = match options.config_path {
        Some(ref path) => match Config::load_from_path(path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}: {}", path.display(), e);
                Config::default()
            }
        },
        None => Config::load().await,
    };

    let settings = settings_from(&config, &EnvOverrides::from_env());
    (settings, config)
}
