use crate::error::{CarzError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SERVER_URL: &str = "https://iit-playground.arondev.hu";

/// Configuration for carz, stored in config.json under the platform config
/// directory (or `$CARZ_CONFIG_DIR` when set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarzConfig {
    /// Base URL of the registry server (no trailing slash).
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Collection code, the path segment identifying one car collection.
    /// There is no default; every user has their own.
    #[serde(default)]
    pub code: Option<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for CarzConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            code: None,
        }
    }
}

impl CarzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CarzError::Io)?;
        let config: CarzConfig =
            serde_json::from_str(&content).map_err(CarzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CarzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CarzError::Serialization)?;
        fs::write(config_path, content).map_err(CarzError::Io)?;
        Ok(())
    }

    /// Set the server base URL (normalizes away a trailing slash)
    pub fn set_server_url(&mut self, url: &str) {
        self.server_url = url.trim().trim_end_matches('/').to_string();
    }

    pub fn set_code(&mut self, code: &str) {
        self.code = Some(code.trim().to_string());
    }

    /// Read a value by its command-line key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server-url" => Some(self.server_url.clone()),
            "code" => Some(self.code.clone().unwrap_or_else(|| "(unset)".to_string())),
            _ => None,
        }
    }

    /// Set a value by its command-line key
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "server-url" => {
                self.set_server_url(value);
                Ok(())
            }
            "code" => {
                self.set_code(value);
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    /// Overlay the `CARZ_SERVER_URL` / `CARZ_CODE` environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CARZ_SERVER_URL") {
            if !url.is_empty() {
                self.set_server_url(&url);
            }
        }
        if let Ok(code) = std::env::var("CARZ_CODE") {
            if !code.is_empty() {
                self.set_code(&code);
            }
        }
    }

    /// The collection endpoint: `{server_url}/api/{code}/car`.
    pub fn endpoint(&self) -> Result<String> {
        let code = self
            .code
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                CarzError::Config(
                    "no collection code set; run `carz config code <CODE>` first".to_string(),
                )
            })?;
        Ok(format!("{}/api/{}/car", self.server_url, code))
    }
}

/// Resolve the config directory: `$CARZ_CONFIG_DIR` wins, otherwise the
/// platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CARZ_CONFIG_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "carz", "carz")
        .ok_or_else(|| CarzError::Config("could not determine the config directory".to_string()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}
