//! Integration tests for CLI
//!
//! These tests verify argument parsing without running an actual drill,
//! using a parser structure that mirrors main.rs.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "linguadrill")]
#[command(author, version, about = "Interactive bilingual sentence drills", long_about = None)]
struct Cli {
    #[arg(long = "source_lang", default_value = "de-DE")]
    source_lang: String,

    #[arg(long = "target_lang", default_value = "it-IT")]
    target_lang: String,

    #[arg(long = "toml_file", default_value = "data/conjugation.toml")]
    toml_file: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_without_arguments() {
    let cli = parse_args(&["linguadrill"]).unwrap();
    assert_eq!(cli.source_lang, "de-DE");
    assert_eq!(cli.target_lang, "it-IT");
    assert_eq!(cli.toml_file, "data/conjugation.toml");
}

#[test]
fn cli_parses_source_lang() {
    let cli = parse_args(&["linguadrill", "--source_lang", "en-US"]).unwrap();
    assert_eq!(cli.source_lang, "en-US");
    assert_eq!(cli.target_lang, "it-IT");
}

#[test]
fn cli_parses_target_lang() {
    let cli = parse_args(&["linguadrill", "--target_lang", "fr-FR"]).unwrap();
    assert_eq!(cli.target_lang, "fr-FR");
}

#[test]
fn cli_parses_toml_file() {
    let cli = parse_args(&["linguadrill", "--toml_file", "lessons/verbs.toml"]).unwrap();
    assert_eq!(cli.toml_file, "lessons/verbs.toml");
}

#[test]
fn cli_parses_all_flags_together() {
    let cli = parse_args(&[
        "linguadrill",
        "--source_lang",
        "en-US",
        "--target_lang",
        "es-ES",
        "--toml_file",
        "lessons/travel.toml",
    ])
    .unwrap();

    assert_eq!(cli.source_lang, "en-US");
    assert_eq!(cli.target_lang, "es-ES");
    assert_eq!(cli.toml_file, "lessons/travel.toml");
}

#[test]
fn cli_flags_use_underscores() {
    // The kebab-case spellings are not accepted.
    assert!(parse_args(&["linguadrill", "--source-lang", "en-US"]).is_err());
    assert!(parse_args(&["linguadrill", "--toml-file", "x.toml"]).is_err());
}

#[test]
fn cli_rejects_unknown_flags() {
    let result = parse_args(&["linguadrill", "--speed", "slow"]);
    assert!(result.is_err());
}

#[test]
fn cli_accepts_unvalidated_language_values() {
    // Validation happens in RunConfig, not in the parser.
    let cli = parse_args(&["linguadrill", "--source_lang", "xx-XX"]).unwrap();
    assert_eq!(cli.source_lang, "xx-XX");
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["linguadrill", "-v"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["linguadrill", "-vvv"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_verbosity_zero_by_default() {
    let cli = parse_args(&["linguadrill"]).unwrap();
    assert_eq!(cli.verbose, 0);
}
