//! `linksmith compose <url>` – compose a URL and print it.

use anyhow::{Context, Result};
use linksmith_core::config::LinksmithConfig;
use linksmith_core::{ComposeOptions, Composer, QueryParams};

use crate::cli::ComposeArgs;

pub fn run_compose(cfg: &LinksmithConfig, args: &ComposeArgs) -> Result<()> {
    let options = build_options(cfg, args)?;
    let composer = match &args.scheme {
        Some(scheme) => Composer::with_default_scheme(scheme),
        None => Composer::from_config(cfg),
    };
    tracing::info!(
        "compose url={} preset={:?} options={}",
        args.url,
        args.preset,
        options.is_some()
    );
    let url = composer.compose(&args.url, options.as_ref())?;
    println!("{url}");
    Ok(())
}

/// Preset first, then flags on top. `None` when neither was given, so the
/// URL passes through untouched.
pub(crate) fn build_options(
    cfg: &LinksmithConfig,
    args: &ComposeArgs,
) -> Result<Option<ComposeOptions>> {
    let base = match &args.preset {
        Some(name) => {
            let preset = cfg.preset(name).with_context(|| {
                let known: Vec<&str> = cfg.presets.keys().map(String::as_str).collect();
                format!("unknown preset '{name}' (known: {})", known.join(", "))
            })?;
            Some(preset.clone())
        }
        None => None,
    };

    let flags = flag_options(args)?;
    Ok(match (base, flags.is_empty()) {
        (Some(base), _) => Some(base.merged_with(&flags)),
        (None, true) => None,
        (None, false) => Some(flags),
    })
}

fn flag_options(args: &ComposeArgs) -> Result<ComposeOptions> {
    let mut opts = ComposeOptions::new();
    if let Some(port) = &args.port {
        opts = opts.port(port.as_str());
    }
    if !args.sub_domains.is_empty() {
        opts = opts.sub_domains(args.sub_domains.iter().cloned());
    }
    if !args.paths.is_empty() {
        opts = opts.paths(args.paths.iter().cloned());
    }

    let mut query = match &args.query_json {
        Some(json) => Some(QueryParams::from_json_str(json).context("parse --query-json")?),
        None => None,
    };
    for (key, value) in &args.query {
        query
            .get_or_insert_with(QueryParams::new)
            .append(key.as_str(), value.as_str());
    }
    if let Some(query) = query {
        opts = opts.query_params(query);
    }
    Ok(opts)
}
