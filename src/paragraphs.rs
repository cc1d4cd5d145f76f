//! Paragraph classification and styling for the card preview.
//!
//! Raw editor text becomes an ordered list of [`StyledParagraph`] values: blank
//! lines vanish, only the first [`MAX_LINES`] survivors are kept, and each line
//! is styled as a heading or as body text. The mapping is pure and total; it
//! is recomputed on every render and never cached.

use crate::config::{AppConfig, FontWeight, Indent};
use crate::headings::HeadingLabels;
use serde::Serialize;

/// Maximum number of paragraphs ever rendered on a card.
pub const MAX_LINES: usize = 20;
/// Minimum body font size (rem).
pub const MIN_BODY_FONT_SIZE: f32 = 1.0;
/// Maximum body font size (rem).
pub const MAX_BODY_FONT_SIZE: f32 = 2.0;
/// Headings are this much larger than body text (rem).
pub const HEADING_SIZE_DELTA: f32 = 0.2;
pub const HEADING_MARGIN_BOTTOM: f32 = 0.1;
pub const BODY_MARGIN_BOTTOM: f32 = 0.5;
/// Paragraphs wrap at this content width (logical px).
pub const MAX_CONTENT_WIDTH_PX: f32 = 520.0;
pub const LINE_HEIGHT: f32 = 2.0;

/// How headings and body lines are told apart and styled.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRules {
    pub heading_labels: HeadingLabels,
    pub heading_weight: FontWeight,
    pub body_indent: Indent,
}

impl StyleRules {
    pub fn from_config(config: &AppConfig) -> Self {
        StyleRules {
            heading_labels: config.effective_heading_labels(),
            heading_weight: config.effective_heading_weight(),
            body_indent: config.effective_body_indent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledParagraph {
    pub content: String,
    pub is_heading: bool,
    pub font_size_rem: f32,
    pub font_weight: FontWeight,
    pub indent: Indent,
    pub margin_bottom_rem: f32,
}

/// Clamp a body font size into the supported range. Non-finite input maps to
/// the minimum.
pub fn clamp_body_font_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_BODY_FONT_SIZE, MAX_BODY_FONT_SIZE)
    } else {
        MIN_BODY_FONT_SIZE
    }
}

/// Sizes are kept to hundredths of a rem so slider noise never leaks into the
/// layout.
fn round_rem(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Split `text` into styled paragraphs.
pub fn style_paragraphs(
    text: &str,
    body_font_size: f32,
    rules: &StyleRules,
) -> Vec<StyledParagraph> {
    let body_size = round_rem(clamp_body_font_size(body_font_size));
    let heading_size = round_rem(body_size + HEADING_SIZE_DELTA);

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_LINES)
        .map(|line| {
            if rules.heading_labels.is_heading(line) {
                StyledParagraph {
                    content: line.to_string(),
                    is_heading: true,
                    font_size_rem: heading_size,
                    font_weight: rules.heading_weight,
                    indent: Indent::None,
                    margin_bottom_rem: HEADING_MARGIN_BOTTOM,
                }
            } else {
                StyledParagraph {
                    content: line.to_string(),
                    is_heading: false,
                    font_size_rem: body_size,
                    font_weight: FontWeight::Normal,
                    indent: rules.body_indent,
                    margin_bottom_rem: BODY_MARGIN_BOTTOM,
                }
            }
        })
        .collect()
}
