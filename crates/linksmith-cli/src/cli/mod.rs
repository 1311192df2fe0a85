//! CLI for the linksmith URL composer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use linksmith_core::config::{self, LinksmithConfig};
use std::path::PathBuf;

use commands::{run_completions, run_compose, run_is_ip, run_man, run_presets};

/// Top-level CLI for linksmith.
#[derive(Debug, Parser)]
#[command(name = "linksmith")]
#[command(about = "linksmith: compose URLs from a base plus port, subdomains, paths and query", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linksmith/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compose a URL and print it.
    Compose(ComposeArgs),

    /// Tell whether a host is an IPv4 or IPv6 literal.
    IsIp {
        /// Host, optionally bracketed and with a port (e.g. "[::1]:8080").
        host: String,
    },

    /// List presets defined in the config file.
    Presets,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ComposeArgs {
    /// Base URL. Returned unchanged when no options or preset are given.
    pub url: String,

    /// Port to set; an empty value clears the existing port.
    #[arg(long)]
    pub port: Option<String>,

    /// Subdomain label to prepend (repeatable, kept in order).
    #[arg(long = "sub-domain", value_name = "LABEL")]
    pub sub_domains: Vec<String>,

    /// Path segment to append (repeatable, kept in order).
    #[arg(long = "path", value_name = "SEGMENT")]
    pub paths: Vec<String>,

    /// Query parameter as KEY=VALUE (repeatable; a repeated key becomes a list).
    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_query_pair)]
    pub query: Vec<(String, String)>,

    /// Query parameters as a JSON object, e.g. '{"page": 1, "tag": ["a", "b"]}'.
    #[arg(long, value_name = "JSON")]
    pub query_json: Option<String>,

    /// Preset from the config file to apply before the flags above.
    #[arg(long)]
    pub preset: Option<String>,

    /// Scheme for schemeless URLs (overrides default_scheme from the config).
    #[arg(long)]
    pub scheme: Option<String>,
}

fn parse_query_pair(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in '{s}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Compose(args) => run_compose(&cli.load_config()?, args)?,
            CliCommand::IsIp { host } => run_is_ip(host),
            CliCommand::Presets => run_presets(&cli.load_config()?)?,
            CliCommand::Completions { shell } => run_completions(*shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }

    fn load_config(&self) -> Result<LinksmithConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
