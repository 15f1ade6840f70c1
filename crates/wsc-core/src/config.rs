use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/wsc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WscConfig {
    /// JSON array of catalog projects.
    pub projects_file: PathBuf,
    /// Template the rendered table is injected into.
    pub template_file: PathBuf,
    /// Generated document (overwritten on every run).
    pub output_file: PathBuf,
    /// Base URL of the GitHub REST API (no trailing slash).
    pub github_api_base: String,
    /// Environment variable holding the GitHub access token.
    pub token_env: String,
    /// Extra host → label entries for source links. Overrides built-in labels.
    #[serde(default)]
    pub host_labels: BTreeMap<String, String>,
}

impl Default for WscConfig {
    fn default() -> Self {
        Self {
            projects_file: PathBuf::from("projects.json"),
            template_file: PathBuf::from("README.md.tmpl"),
            output_file: PathBuf::from("README.md"),
            github_api_base: "https://api.github.com".to_string(),
            token_env: "GITHUB_ACCESS_TOKEN".to_string(),
            host_labels: BTreeMap::new(),
        }
    }
}

impl WscConfig {
    /// Token from the configured environment variable, if set and non-empty.
    pub fn github_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.is_empty())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wsc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WscConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WscConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: WscConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
