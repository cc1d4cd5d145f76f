//! Entry point for the fortune card editor.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Either print a headless layout/config dump or launch the GUI editor.

mod app;
mod config;
mod export;
mod headings;
mod paragraphs;
mod prompt;
mod text_utils;

use crate::app::{SAMPLE_TEXT, run_app};
use crate::config::{AppConfig, load_config, serialize_config};
use crate::paragraphs::{StyleRules, style_paragraphs};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: fortune-card [TEXT_FILE] | --layout TEXT_FILE | --print-config";

#[derive(Debug, PartialEq)]
enum Command {
    Edit(Option<PathBuf>),
    Layout(PathBuf),
    PrintConfig,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let command = parse_args(env::args().skip(1))?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    match command {
        Command::Edit(path) => {
            let text = match &path {
                Some(path) => read_text(path)?,
                None => SAMPLE_TEXT.to_string(),
            };
            info!(
                variant = %config.variant,
                level = %config.log_level,
                source = %path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "sample".to_string()),
                "Starting card editor"
            );
            run_app(config, text).context("Failed to start the GUI")?;
        }
        Command::Layout(path) => {
            let text = read_text(&path)?;
            println!("{}", layout_json(&config, &text)?);
        }
        Command::PrintConfig => {
            print!("{}", serialize_config(&config)?);
        }
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let command = match args.next().as_deref() {
        None => Command::Edit(None),
        Some("--layout") => {
            let path = args
                .next()
                .ok_or_else(|| anyhow!("--layout needs a text file\n{USAGE}"))?;
            Command::Layout(PathBuf::from(path))
        }
        Some("--print-config") => Command::PrintConfig,
        Some("-h" | "--help") => return Err(anyhow!(USAGE)),
        Some(flag) if flag.starts_with("--") => {
            return Err(anyhow!("Unknown option {flag}\n{USAGE}"));
        }
        Some(path) => Command::Edit(Some(PathBuf::from(path))),
    };
    if let Some(extra) = args.next() {
        return Err(anyhow!("Unexpected argument {extra}\n{USAGE}"));
    }
    Ok(command)
}

fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Styled paragraphs for `text` under `config`, as pretty JSON.
fn layout_json(config: &AppConfig, text: &str) -> Result<String> {
    let rules = StyleRules::from_config(config);
    let paragraphs = style_paragraphs(text, config.body_font_size, &rules);
    serde_json::to_string_pretty(&paragraphs).context("Failed to serialize layout")
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_supported_commands() {
        assert_eq!(parse_args(args(&[])).unwrap(), Command::Edit(None));
        assert_eq!(
            parse_args(args(&["reading.txt"])).unwrap(),
            Command::Edit(Some(PathBuf::from("reading.txt")))
        );
        assert_eq!(
            parse_args(args(&["--layout", "reading.txt"])).unwrap(),
            Command::Layout(PathBuf::from("reading.txt"))
        );
        assert_eq!(
            parse_args(args(&["--print-config"])).unwrap(),
            Command::PrintConfig
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&["--layout"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
    }

    #[test]
    fn layout_json_lists_styled_paragraphs() {
        let json = layout_json(&AppConfig::default(), "一、整體運勢分析\n今年運勢佳\n\n\n")
            .expect("layout serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["is_heading"], true);
        assert_eq!(items[1]["indent"], "2em");
    }
}
