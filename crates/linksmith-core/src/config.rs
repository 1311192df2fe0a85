use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::{ComposeOptions, DEFAULT_SCHEME};

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

/// Global configuration loaded from `~/.config/linksmith/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksmithConfig {
    /// Scheme prepended to base URLs without one when options are applied.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Named option sets, applied with `linksmith compose --preset <name>`.
    #[serde(default)]
    pub presets: BTreeMap<String, ComposeOptions>,
}

impl Default for LinksmithConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            presets: BTreeMap::new(),
        }
    }
}

impl LinksmithConfig {
    pub fn preset(&self, name: &str) -> Option<&ComposeOptions> {
        self.presets.get(name)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linksmith")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinksmithConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinksmithConfig> {
    if !path.exists() {
        let default_cfg = LinksmithConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinksmithConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
