use super::defaults;
use super::models::{AppConfig, CardVariant, FontFamily, FontWeight, Indent, LogLevel, ThemeMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    card: CardConfig,
    #[serde(default)]
    headings: HeadingsConfig,
    #[serde(default)]
    export: ExportConfig,
    #[serde(default)]
    prompt: PromptConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            variant: tables.card.variant,
            recipient_name: tables.card.recipient_name,
            body_font_size: tables.card.body_font_size,
            title_font_size: tables.card.title_font_size,
            title_suffix: tables.card.title_suffix,
            background_image: tables.card.background_image,
            text_color: tables.card.text_color,
            rem_px: tables.card.rem_px,
            heading_labels: tables.headings.labels,
            heading_weight: tables.headings.heading_weight,
            body_indent: tables.headings.body_indent,
            export_dir: tables.export.directory,
            export_timeout_secs: tables.export.timeout_secs,
            prompt_source: tables.prompt.source,
            prompt_timeout_secs: tables.prompt.timeout_secs,
            theme: tables.appearance.theme,
            font_family: tables.appearance.font_family,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            key_export: tables.ui.key_export,
            key_copy_prompt: tables.ui.key_copy_prompt,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            card: CardConfig {
                variant: config.variant,
                recipient_name: config.recipient_name.clone(),
                body_font_size: config.body_font_size,
                title_font_size: config.title_font_size,
                title_suffix: config.title_suffix.clone(),
                background_image: config.background_image.clone(),
                text_color: config.text_color.clone(),
                rem_px: config.rem_px,
            },
            headings: HeadingsConfig {
                labels: config.heading_labels.clone(),
                heading_weight: config.heading_weight,
                body_indent: config.body_indent,
            },
            export: ExportConfig {
                directory: config.export_dir.clone(),
                timeout_secs: config.export_timeout_secs,
            },
            prompt: PromptConfig {
                source: config.prompt_source.clone(),
                timeout_secs: config.prompt_timeout_secs,
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                font_family: config.font_family,
            },
            ui: UiConfig {
                window_width: config.window_width,
                window_height: config.window_height,
                key_export: config.key_export.clone(),
                key_copy_prompt: config.key_copy_prompt.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct CardConfig {
    #[serde(default)]
    variant: CardVariant,
    #[serde(default = "defaults::default_recipient_name")]
    recipient_name: String,
    #[serde(default = "defaults::default_body_font_size")]
    body_font_size: f32,
    #[serde(default = "defaults::default_title_font_size")]
    title_font_size: f32,
    #[serde(default = "defaults::default_title_suffix")]
    title_suffix: String,
    #[serde(default = "defaults::default_background_image")]
    background_image: String,
    #[serde(default = "defaults::default_text_color")]
    text_color: String,
    #[serde(default = "defaults::default_rem_px")]
    rem_px: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            variant: CardVariant::default(),
            recipient_name: defaults::default_recipient_name(),
            body_font_size: defaults::default_body_font_size(),
            title_font_size: defaults::default_title_font_size(),
            title_suffix: defaults::default_title_suffix(),
            background_image: defaults::default_background_image(),
            text_color: defaults::default_text_color(),
            rem_px: defaults::default_rem_px(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct HeadingsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body_indent: Option<Indent>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ExportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    directory: Option<String>,
    #[serde(default = "defaults::default_timeout_secs")]
    timeout_secs: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: None,
            timeout_secs: defaults::default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct PromptConfig {
    #[serde(default = "defaults::default_prompt_source")]
    source: String,
    #[serde(default = "defaults::default_timeout_secs")]
    timeout_secs: f32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            source: defaults::default_prompt_source(),
            timeout_secs: defaults::default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default)]
    font_family: FontFamily,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_key_export")]
    key_export: String,
    #[serde(default = "defaults::default_key_copy_prompt")]
    key_copy_prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            key_export: defaults::default_key_export(),
            key_copy_prompt: defaults::default_key_copy_prompt(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
