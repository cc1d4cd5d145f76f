use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if self.alert.is_some() {
            return match key.as_ref() {
                Key::Named(key::Named::Escape | key::Named::Enter) => Some(Message::DismissAlert),
                _ => None,
            };
        }

        let pressed = match key.as_ref() {
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_export, "ctrl+s", &pressed, modifiers) {
            Some(Message::ExportRequested)
        } else if Self::shortcut_matches(
            &self.config.key_copy_prompt,
            "ctrl+shift+c",
            &pressed,
            modifiers,
        ) {
            Some(Message::CopyPromptRequested)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn blank_shortcut_uses_fallback() {
        assert_eq!(App::normalize_shortcut("   ", "ctrl+s"), "ctrl+s");
        assert_eq!(App::normalize_shortcut(" Ctrl+S ", "x"), "ctrl+s");
    }

    #[test]
    fn matches_ctrl_shift_c() {
        assert!(App::shortcut_matches(
            "ctrl+shift+c",
            "x",
            "c",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn rejects_missing_modifier() {
        assert!(!App::shortcut_matches("ctrl+s", "x", "s", Modifiers::empty()));
        assert!(!App::shortcut_matches(
            "ctrl+s",
            "x",
            "s",
            Modifiers::CTRL | Modifiers::ALT,
        ));
    }

    #[test]
    fn modifier_only_shortcut_never_fires() {
        assert!(!App::shortcut_matches("ctrl", "x", "ctrl", Modifiers::CTRL));
    }

    #[test]
    fn enter_dismisses_open_alert() {
        let (mut app, _task) = App::bootstrap(AppConfig::default(), String::new());
        app.alert = Some(crate::app::state::Alert::success("ok"));
        let message = app.shortcut_message_for_key(
            Key::Named(key::Named::Enter),
            Modifiers::empty(),
        );
        assert!(matches!(message, Some(Message::DismissAlert)));
    }

    #[test]
    fn ctrl_s_requests_export() {
        let (app, _task) = App::bootstrap(AppConfig::default(), String::new());
        let message =
            app.shortcut_message_for_key(Key::Character("s".into()), Modifiers::CTRL);
        assert!(matches!(message, Some(Message::ExportRequested)));
    }
}
