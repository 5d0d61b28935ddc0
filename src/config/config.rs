use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, GITHUB_GRAPHQL_URL, TOKEN_ENV_VAR};
use crate::error::{ExportError, ExportResult};

/// Optional settings read from `~/.github-project-csv.json`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub personal_access_token: Option<String>,
    pub api_url: Option<String>,
    pub page_size: Option<u32>,
    pub max_pages: Option<usize>,
}

impl Config {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(GITHUB_GRAPHQL_URL)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages.unwrap_or(DEFAULT_MAX_PAGES)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults when there is no file.
pub fn load_config() -> ExportResult<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> ExportResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .map_err(|e| ExportError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&config_str)
        .map_err(|e| ExportError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Pick the personal access token: command line first, then the
/// environment, then the config file. `None` selects the gh transport.
pub fn resolve_token(flag: Option<&str>, config: &Config) -> Option<String> {
    let from_env = env::var(TOKEN_ENV_VAR).ok();
    pick_token(flag, from_env.as_deref(), config)
}

fn pick_token(flag: Option<&str>, from_env: Option<&str>, config: &Config) -> Option<String> {
    [flag, from_env, config.personal_access_token.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(str::to_string)
}
