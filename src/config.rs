use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{DashError, Result};

#[derive(Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub default_project: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| DashError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| DashError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "jdash")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(DashError::NoConfigDir)
    }

    /// Get API URL with env var taking precedence over config file
    pub fn api_url(&self) -> Result<String> {
        if let Ok(u) = std::env::var("JDASH_API_URL") {
            return Ok(u);
        }

        self.api_url.clone().ok_or(DashError::MissingApiUrl)
    }

    /// Get project key, preferring explicit argument over default
    pub fn resolve_project(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(String::from)
            .or_else(|| self.default_project.clone())
            .ok_or(DashError::NoProject)
    }
}
