use crate::headings::HeadingLabels;
use serde::{Deserialize, Serialize};

/// High-level app configuration; the flat view of the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub variant: CardVariant,
    pub recipient_name: String,
    pub body_font_size: f32,
    pub title_font_size: f32,
    pub title_suffix: String,
    pub background_image: String,
    pub text_color: String,
    pub rem_px: f32,
    pub heading_labels: Option<Vec<String>>,
    pub heading_weight: Option<FontWeight>,
    pub body_indent: Option<Indent>,
    pub export_dir: Option<String>,
    pub export_timeout_secs: f32,
    pub prompt_source: String,
    pub prompt_timeout_secs: f32,
    pub theme: ThemeMode,
    pub font_family: FontFamily,
    pub window_width: f32,
    pub window_height: f32,
    pub key_export: String,
    pub key_copy_prompt: String,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            variant: CardVariant::default(),
            recipient_name: crate::config::defaults::default_recipient_name(),
            body_font_size: crate::config::defaults::default_body_font_size(),
            title_font_size: crate::config::defaults::default_title_font_size(),
            title_suffix: crate::config::defaults::default_title_suffix(),
            background_image: crate::config::defaults::default_background_image(),
            text_color: crate::config::defaults::default_text_color(),
            rem_px: crate::config::defaults::default_rem_px(),
            heading_labels: None,
            heading_weight: None,
            body_indent: None,
            export_dir: None,
            export_timeout_secs: crate::config::defaults::default_timeout_secs(),
            prompt_source: crate::config::defaults::default_prompt_source(),
            prompt_timeout_secs: crate::config::defaults::default_timeout_secs(),
            theme: ThemeMode::default(),
            font_family: FontFamily::default(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            key_export: crate::config::defaults::default_key_export(),
            key_copy_prompt: crate::config::defaults::default_key_copy_prompt(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Heading labels in effect: the configured override when it names at
    /// least one label, otherwise the variant's own set.
    pub fn effective_heading_labels(&self) -> HeadingLabels {
        self.heading_labels
            .as_ref()
            .map(HeadingLabels::new)
            .filter(|labels| !labels.is_empty())
            .unwrap_or_else(|| self.variant.heading_labels())
    }

    pub fn effective_heading_weight(&self) -> FontWeight {
        self.heading_weight
            .unwrap_or_else(|| self.variant.heading_weight())
    }

    pub fn effective_body_indent(&self) -> Indent {
        self.body_indent.unwrap_or_else(|| self.variant.body_indent())
    }
}

/// Card presets. The two layouts disagree on heading labels, heading weight,
/// body indentation and export filename; each preset bundles one consistent
/// choice.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Compact card: indented body, regular-weight headings, fixed title size.
    #[default]
    Classic,
    /// Report card: flush body, bold headings, adjustable title size.
    Report,
}

impl CardVariant {
    pub fn heading_labels(self) -> HeadingLabels {
        match self {
            CardVariant::Classic => HeadingLabels::classic(),
            CardVariant::Report => HeadingLabels::report(),
        }
    }

    pub fn heading_weight(self) -> FontWeight {
        match self {
            CardVariant::Classic => FontWeight::Normal,
            CardVariant::Report => FontWeight::Bold,
        }
    }

    pub fn body_indent(self) -> Indent {
        match self {
            CardVariant::Classic => Indent::TwoEm,
            CardVariant::Report => Indent::None,
        }
    }

    pub fn export_file_name(self) -> &'static str {
        match self {
            CardVariant::Classic => "命理小卡.png",
            CardVariant::Report => "命理卡.png",
        }
    }

    pub fn shows_title_slider(self) -> bool {
        matches!(self, CardVariant::Report)
    }
}

impl std::fmt::Display for CardVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CardVariant::Classic => "classic",
            CardVariant::Report => "report",
        };
        write!(f, "{}", label)
    }
}

/// Paragraph font weight.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_weight(self) -> iced::font::Weight {
        match self {
            FontWeight::Normal => iced::font::Weight::Normal,
            FontWeight::Bold => iced::font::Weight::Bold,
        }
    }
}

/// First-line indentation of a paragraph.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Indent {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "2em")]
    TwoEm,
}

impl Indent {
    /// Text placed before the paragraph content. Two ideographic spaces are
    /// exactly 2em wide in CJK fonts.
    pub fn prefix(self) -> &'static str {
        match self {
            Indent::None => "",
            Indent::TwoEm => "\u{3000}\u{3000}",
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

/// Font family options.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Sans,
    Serif,
    #[default]
    NotoSansTc,
    NotoSerifTc,
    HuninnTc,
}

impl FontFamily {
    pub fn to_family(self) -> iced::font::Family {
        use iced::font::Family;
        match self {
            FontFamily::Sans => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::NotoSansTc => Family::Name("Noto Sans TC"),
            FontFamily::NotoSerifTc => Family::Name("Noto Serif TC"),
            FontFamily::HuninnTc => Family::Name("jf-openhuninn-2.0"),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
