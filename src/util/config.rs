use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Searched when the working directory is not a repository and
    /// `QGH_WORKSPACE` is not set.
    #[serde(default)]
    pub workspace: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_gh_program")]
    pub gh_program: String,
    #[serde(default = "default_pr_search_limit")]
    pub pr_search_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_fallback_height")]
    pub fallback_height: u16,
}

fn default_true() -> bool {
    true
}
fn default_gh_program() -> String {
    "gh".to_string()
}
fn default_pr_search_limit() -> u32 {
    200
}
fn default_fallback_height() -> u16 {
    24
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workspace: None,
            respect_gitignore: true,
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            gh_program: default_gh_program(),
            pr_search_limit: default_pr_search_limit(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fallback_height: default_fallback_height(),
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return read_config(path);
        }

        let mut candidates = Vec::new();

        // ~/.config/qgh/config.toml on every platform
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/qgh/config.toml"));
        }

        // macOS: ~/Library/Application Support/qgh/
        if let Some(proj_dirs) = ProjectDirs::from("", "", "qgh") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        match candidates.iter().find(|p| p.exists()) {
            Some(path) => read_config(path),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "qgh") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/qgh/logs")
    }
}
