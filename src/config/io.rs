use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from disk, falling back to defaults on any failure.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), "No config file ({err}); using defaults");
            return AppConfig::default();
        }
    };
    match parse_config(&contents) {
        Ok(config) => {
            info!(
                path = %path.display(),
                variant = %config.variant,
                "Loaded config"
            );
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config, using defaults: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("failed to parse config TOML")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize config")
}

/// Parse `#rrggbb` (leading `#` optional) into RGB bytes.
pub fn parse_hex_color(raw: &str) -> Option<[u8; 3]> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CardVariant, FontWeight, Indent, LogLevel};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = parse_config(
            r#"
            [card]
            variant = "report"
            body_font_size = 1.25

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.variant, CardVariant::Report);
        assert_eq!(config.body_font_size, 1.25);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.recipient_name, "王小明");
        assert_eq!(config.prompt_source, "public/gpt.txt");
    }

    #[test]
    fn heading_overrides_apply_over_variant() {
        let config = parse_config(
            r#"
            [headings]
            labels = ["序", "跋"]
            heading_weight = "bold"
            body_indent = "none"
            "#,
        )
        .expect("heading config parses");
        let labels = config.effective_heading_labels();
        assert!(labels.is_heading("序"));
        assert!(!labels.is_heading("一、整體運勢分析"));
        assert_eq!(config.effective_heading_weight(), FontWeight::Bold);
        assert_eq!(config.effective_body_indent(), Indent::None);
    }

    #[test]
    fn blank_label_override_falls_back_to_variant() {
        let config = parse_config("[headings]\nlabels = [\"  \"]\n").expect("parses");
        assert!(config.effective_heading_labels().is_heading("二、感情運勢"));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(parse_config("[card]\nvariant = \"poster\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.variant = CardVariant::Report;
        config.export_dir = Some("/tmp/cards".to_string());
        config.heading_labels = Some(vec!["序".to_string()]);
        let serialized = serialize_config(&config).expect("serializes");
        assert_eq!(parse_config(&serialized).expect("parses"), config);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#000000"), Some([0, 0, 0]));
        assert_eq!(parse_hex_color("ff8000"), Some([255, 128, 0]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
