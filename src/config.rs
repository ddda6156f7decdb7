use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Organisation owning both boards.
    pub owner: String,
    /// Number of the destination ("roadmap") board.
    pub roadmap: u64,
    /// Opaque id of the roadmap board, looked up from the project list when unset.
    pub roadmap_project_id: Option<String>,
    pub item_limit: u32,
    pub gh_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: "giantswarm".into(),
            roadmap: 273,
            roadmap_project_id: None,
            item_limit: 10_000,
            gh_path: "gh".into(),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roadmap-migrate")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
