use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::DateLayout;
use crate::percent::TrailingEscape;
use crate::unique_file::DEFAULT_MAX_COUNTER;

/// Global configuration loaded from `~/.config/utilkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilkitConfig {
    /// What the decoder does with a `%` in the last two bytes: "reject" or "keep".
    #[serde(default)]
    pub trailing_escape: TrailingEscape,
    /// Exclusive upper bound for `-N` suffixes when allocating unique names.
    /// If missing, the full `i32` range is searched.
    #[serde(default)]
    pub max_unique_counter: Option<u32>,
    /// Layout assumed by `utilkit date` when `--layout` is not given.
    #[serde(default)]
    pub date_layout: DateLayout,
}

impl Default for UtilkitConfig {
    fn default() -> Self {
        Self {
            trailing_escape: TrailingEscape::Reject,
            max_unique_counter: None,
            date_layout: DateLayout::Compact,
        }
    }
}

impl UtilkitConfig {
    pub fn unique_counter_limit(&self) -> u32 {
        self.max_unique_counter.unwrap_or(DEFAULT_MAX_COUNTER)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("utilkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UtilkitConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UtilkitConfig> {
    if !path.exists() {
        let default_cfg = UtilkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UtilkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
