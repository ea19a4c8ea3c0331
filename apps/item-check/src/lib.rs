//! # item-check
//!
//! Validates item documents against the item policy and reports every
//! rejected field.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         item-check run                                  │
//! │                                                                         │
//! │  1. CheckConfig::load   (defaults → TOML file → environment)           │
//! │  2. read each FILE, or stdin when no file is given                     │
//! │  3. parse_items         (object or array of objects)                   │
//! │  4. ItemValidator       (every rule, every item)                       │
//! │  5. CheckReport::write  (JSON or text on stdout)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Status
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | every item passed                         |
//! | 1    | at least one item was rejected            |
//! | 2    | I/O, parse, or configuration failure      |

pub mod config;
pub mod error;
pub mod input;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::{CheckConfig, OutputFormat};
use crate::report::CheckReport;

/// Source name used for items read from standard input.
pub const STDIN_SOURCE: &str = "stdin";

/// Exit status when every item passed.
pub const EXIT_VALID: u8 = 0;
/// Exit status when at least one item was rejected.
pub const EXIT_REJECTED: u8 = 1;
/// Exit status for I/O, parse, and configuration failures.
pub const EXIT_FAILURE: u8 = 2;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "item-check", version, about = "Validate item registration forms")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format; overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON documents to check; reads stdin when empty
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

/// Runs a check and writes the report to stdout.
pub fn run(cli: &Cli) -> Result<CheckReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, read_stdin, &mut out)
}

/// Runs a check with explicit stdin and stdout.
pub fn run_with<F, W>(cli: &Cli, stdin: F, out: &mut W) -> Result<CheckReport>
where
    F: FnOnce() -> io::Result<String>,
    W: Write,
{
    let config = CheckConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let validator = config.validator()?;
    let format = cli.format.unwrap_or(config.output.format);

    debug!(
        policy = ?validator.policy(),
        code_format = %validator.code_format(),
        ?format,
        "Validator ready"
    );

    let mut report = CheckReport::new();

    if cli.files.is_empty() {
        let contents = stdin().context("failed to read stdin")?;
        let items = input::parse_items(STDIN_SOURCE, &contents)?;
        report.check(&validator, STDIN_SOURCE, items);
    } else {
        for path in &cli.files {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let source = path.display().to_string();
            let items = input::parse_items(&source, &contents)?;
            debug!(%source, count = items.len(), "Parsed items");
            report.check(&validator, &source, items);
        }
    }

    report.write(format, out).context("failed to write report")?;

    if report.all_valid() {
        info!(items = report.items.len(), "All items valid");
    } else {
        warn!(
            items = report.items.len(),
            invalid = report.invalid_count(),
            errors = report.total_errors,
            "Items rejected"
        );
    }

    Ok(report)
}

/// Maps the outcome of [`run`] to the process exit status.
pub fn exit_status(result: &Result<CheckReport>) -> u8 {
    match result {
        Ok(report) if report.all_valid() => EXIT_VALID,
        Ok(_) => EXIT_REJECTED,
        Err(_) => EXIT_FAILURE,
    }
}

fn read_stdin() -> io::Result<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn cli(config: &tempfile::NamedTempFile, files: Vec<PathBuf>) -> Cli {
        Cli {
            config: Some(config.path().to_path_buf()),
            format: None,
            files,
        }
    }

    fn empty_config() -> tempfile::NamedTempFile {
        tempfile::NamedTempFile::new().unwrap()
    }

    fn clear_env_vars() {
        for var in [
            "ITEM_MIN_PRICE",
            "ITEM_MAX_PRICE",
            "ITEM_MAX_QUANTITY",
            "ITEM_MIN_TOTAL_PRICE",
            "ITEM_CODE_FORMAT",
            "ITEM_OUTPUT_FORMAT",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from([
            "item-check",
            "--config",
            "c.toml",
            "--format",
            "text",
            "a.json",
            "b.json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.format, Some(OutputFormat::Text));
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["item-check", "--format", "xml"]).is_err());
    }

    #[test]
    #[serial]
    fn test_reads_stdin_when_no_files() {
        clear_env_vars();
        let config = empty_config();
        let mut out = Vec::new();

        let report = run_with(
            &cli(&config, Vec::new()),
            || Ok(r#"{"itemName":"Book","price":2000,"quantity":10}"#.to_string()),
            &mut out,
        )
        .unwrap();

        assert!(report.all_valid());
        assert_eq!(report.items[0].source, STDIN_SOURCE);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["totalErrors"], 0);
    }

    #[test]
    #[serial]
    fn test_reads_files_in_order() {
        clear_env_vars();
        let config = empty_config();
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        std::fs::write(&first, r#"{"itemName":"Book","price":1000,"quantity":5}"#).unwrap();
        std::fs::write(&second, r#"[{"itemName":"Pen","price":2000,"quantity":10}]"#).unwrap();

        let mut out = Vec::new();
        let mut args = cli(&config, vec![first.clone(), second]);
        args.format = Some(OutputFormat::Text);

        let report = run_with(&args, || panic!("stdin must not be read"), &mut out).unwrap();

        assert_eq!(report.items.len(), 2);
        assert!(!report.items[0].valid);
        assert_eq!(report.items[0].source, first.display().to_string());
        assert!(report.items[1].valid);
        assert_eq!(report.total_errors, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("item: totalPriceMin [10000, 5000]"));
    }

    #[test]
    #[serial]
    fn test_config_policy_applies() {
        clear_env_vars();
        let mut config = empty_config();
        config.write_all(b"[policy]\nmin_total_price = 0\n").unwrap();

        let mut out = Vec::new();
        let report = run_with(
            &cli(&config, Vec::new()),
            || Ok(r#"{"itemName":"Book","price":1000,"quantity":1}"#.to_string()),
            &mut out,
        )
        .unwrap();

        assert!(report.all_valid());
    }

    #[test]
    #[serial]
    fn test_missing_file_fails() {
        clear_env_vars();
        let config = empty_config();
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let error = run_with(
            &cli(&config, vec![dir.path().join("absent.json")]),
            || Ok(String::new()),
            &mut out,
        )
        .unwrap_err();

        assert!(format!("{error:#}").contains("failed to read"));
        assert!(out.is_empty());
    }

    #[test]
    #[serial]
    fn test_exit_status() {
        clear_env_vars();
        let config = empty_config();
        let args = cli(&config, Vec::new());
        let status = |document: &'static str| {
            let mut out = Vec::new();
            exit_status(&run_with(&args, || Ok(document.to_string()), &mut out))
        };

        assert_eq!(status("[]"), EXIT_VALID);
        assert_eq!(status(r#"{"itemName":"Book","price":2000,"quantity":10}"#), EXIT_VALID);
        assert_eq!(status(r#"{"itemName":"","price":500,"quantity":10000}"#), EXIT_REJECTED);
        assert_eq!(status("42"), EXIT_FAILURE);
        assert_eq!(status("{"), EXIT_FAILURE);
    }

    #[test]
    #[serial]
    fn test_malformed_input_fails() {
        clear_env_vars();
        let config = empty_config();
        let mut out = Vec::new();

        let error = run_with(&cli(&config, Vec::new()), || Ok("[1, 2]".to_string()), &mut out)
            .unwrap_err();

        assert!(error.downcast_ref::<crate::error::InputError>().is_some());
    }
}
