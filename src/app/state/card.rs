use super::constants::{MAX_TITLE_FONT_SIZE, MIN_TITLE_FONT_SIZE};
use crate::config::AppConfig;
use crate::paragraphs::clamp_body_font_size;

/// User-adjustable values that shape the card, apart from the text itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub(in crate::app) recipient_name: String,
    pub(in crate::app) body_font_size: f32,
    pub(in crate::app) title_font_size: f32,
}

impl DisplaySettings {
    pub(in crate::app) fn from_config(config: &AppConfig) -> Self {
        DisplaySettings {
            recipient_name: config.recipient_name.clone(),
            body_font_size: clamp_body_font_size(config.body_font_size),
            title_font_size: clamp_title_font_size(config.title_font_size),
        }
    }

    /// Returns whether the stored value changed.
    pub(in crate::app) fn set_body_font_size(&mut self, size: f32) -> bool {
        if !size.is_finite() {
            return false;
        }
        let clamped = clamp_body_font_size(size);
        let changed = (clamped - self.body_font_size).abs() > f32::EPSILON;
        self.body_font_size = clamped;
        changed
    }

    /// Returns whether the stored value changed.
    pub(in crate::app) fn set_title_font_size(&mut self, size: f32) -> bool {
        if !size.is_finite() {
            return false;
        }
        let clamped = clamp_title_font_size(size);
        let changed = (clamped - self.title_font_size).abs() > f32::EPSILON;
        self.title_font_size = clamped;
        changed
    }
}

pub(crate) fn clamp_title_font_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_TITLE_FONT_SIZE, MAX_TITLE_FONT_SIZE)
    } else {
        MIN_TITLE_FONT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_sizes_from_config() {
        let config = AppConfig {
            body_font_size: 0.2,
            title_font_size: 9.0,
            ..AppConfig::default()
        };
        let settings = DisplaySettings::from_config(&config);
        assert_eq!(settings.body_font_size, 1.0);
        assert_eq!(settings.title_font_size, 3.0);
    }

    #[test]
    fn ignores_non_finite_slider_values() {
        let mut settings = DisplaySettings::from_config(&AppConfig::default());
        assert!(!settings.set_body_font_size(f32::NAN));
        assert!(!settings.set_title_font_size(f32::INFINITY));
        assert_eq!(settings.body_font_size, 1.5);
        assert_eq!(settings.title_font_size, 1.8);
    }

    #[test]
    fn reports_changes_only_when_value_moves() {
        let mut settings = DisplaySettings::from_config(&AppConfig::default());
        assert!(!settings.set_body_font_size(1.5));
        assert!(settings.set_body_font_size(1.75));
        assert!(settings.set_body_font_size(2.5));
        assert_eq!(settings.body_font_size, 2.0);
        assert!(!settings.set_body_font_size(3.0));
    }
}
