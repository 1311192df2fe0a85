//! Tests for is-ip, presets, completions, man.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_is_ip() {
    match parse(&["linksmith", "is-ip", "[::1]:8080"]) {
        CliCommand::IsIp { host } => assert_eq!(host, "[::1]:8080"),
        _ => panic!("expected IsIp"),
    }
}

#[test]
fn cli_parse_presets() {
    match parse(&["linksmith", "presets"]) {
        CliCommand::Presets => {}
        _ => panic!("expected Presets"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["linksmith", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["linksmith", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_command_is_well_formed() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
