mod card;
mod constants;
mod export;
mod ui;

use crate::config::{AppConfig, FontWeight, parse_hex_color};
use crate::export::default_export_dir;
use crate::paragraphs::{StyleRules, StyledParagraph, style_paragraphs};
use crate::text_utils::collapse_blank_lines;
use iced::widget::{image, text_editor};
use iced::{Color, Font, Task};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use super::messages::Message;

pub(in crate::app) use card::DisplaySettings;
pub(crate) use constants::*;
pub(in crate::app) use export::{ExportPhase, ExportState};
pub(in crate::app) use ui::{Alert, AlertKind, PromptState, WindowState};

/// Editor state: the single owner of everything the card is drawn from.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) rules: StyleRules,
    /// Sanitized raw text; the classifier reads this, never the widget.
    pub(super) text: String,
    pub(super) editor: text_editor::Content,
    pub(super) settings: DisplaySettings,
    pub(super) background: image::Handle,
    pub(super) text_color: Color,
    pub(super) export: ExportState,
    pub(super) prompt: PromptState,
    pub(super) alert: Option<Alert>,
    pub(super) window: WindowState,
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig, text: String) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let text = collapse_blank_lines(&text).into_owned();
        let rules = StyleRules::from_config(&config);
        let text_color = match parse_hex_color(&config.text_color) {
            Some([r, g, b]) => Color::from_rgb8(r, g, b),
            None => {
                warn!(color = %config.text_color, "Unrecognized text color; using black");
                Color::BLACK
            }
        };
        info!(
            variant = %config.variant,
            heading_labels = rules.heading_labels.len(),
            background = %config.background_image,
            "Opening card"
        );

        let app = App {
            rules,
            editor: text_editor::Content::with_text(&text),
            text,
            settings: DisplaySettings::from_config(&config),
            background: image::Handle::from_path(&config.background_image),
            text_color,
            export: ExportState::new(),
            prompt: PromptState::default(),
            alert: None,
            window: WindowState {
                width: config.window_width,
            },
            config,
        };
        (app, Task::none())
    }

    /// Paragraphs for the current render pass.
    pub(super) fn styled_paragraphs(&self) -> Vec<StyledParagraph> {
        style_paragraphs(&self.text, self.settings.body_font_size, &self.rules)
    }

    pub(super) fn card_font(&self, weight: FontWeight) -> Font {
        Font {
            family: self.config.font_family.to_family(),
            weight: weight.to_weight(),
            ..Font::DEFAULT
        }
    }

    pub(super) fn rem(&self, value: f32) -> f32 {
        value * self.config.rem_px
    }

    pub(super) fn export_dir(&self) -> PathBuf {
        self.config
            .export_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir)
    }

    pub(super) fn export_timeout(&self) -> Duration {
        Duration::from_secs_f32(self.config.export_timeout_secs)
    }

    pub(super) fn prompt_timeout(&self) -> Duration {
        Duration::from_secs_f32(self.config.prompt_timeout_secs)
    }

    /// Physical pixels per logical pixel, derived from a capture width.
    pub(super) fn capture_scale(&self, frame_width: u32) -> f32 {
        if self.window.width > 0.0 && frame_width > 0 {
            frame_width as f32 / self.window.width
        } else {
            1.0
        }
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.body_font_size = crate::paragraphs::clamp_body_font_size(config.body_font_size);
    config.title_font_size = card::clamp_title_font_size(config.title_font_size);
    if !(config.rem_px.is_finite() && config.rem_px > 0.0) {
        config.rem_px = 16.0;
    }
    config.export_timeout_secs = clamp_timeout(config.export_timeout_secs);
    config.prompt_timeout_secs = clamp_timeout(config.prompt_timeout_secs);
    config.window_width = config.window_width.max(CARD_WIDTH_PX);
    config.window_height = config.window_height.max(480.0);
}

fn clamp_timeout(secs: f32) -> f32 {
    if secs.is_finite() {
        secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    } else {
        MAX_TIMEOUT_SECS
    }
}
