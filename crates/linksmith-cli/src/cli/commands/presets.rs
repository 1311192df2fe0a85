//! `linksmith presets` – list presets from the config file.

use anyhow::Result;
use linksmith_core::config::LinksmithConfig;

pub fn run_presets(cfg: &LinksmithConfig) -> Result<()> {
    if cfg.presets.is_empty() {
        println!("No presets configured.");
        return Ok(());
    }
    println!("{:<16} {}", "NAME", "OPTIONS");
    for (name, options) in &cfg.presets {
        println!("{:<16} {}", name, serde_json::to_string(options)?);
    }
    Ok(())
}
