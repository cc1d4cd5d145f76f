use super::super::state::App;
use crate::text_utils::{collapse_blank_lines, collapsed_line_index};
use iced::widget::text_editor::{Action, Content, Motion};
use std::borrow::Cow;
use tracing::debug;

impl App {
    pub(in crate::app::update) fn handle_text_edited(&mut self, action: Action) {
        let is_edit = action.is_edit();
        self.editor.perform(action);
        if !is_edit {
            return;
        }

        let raw = self.editor.text();
        let cleaned = match collapse_blank_lines(&raw) {
            Cow::Borrowed(_) => None,
            Cow::Owned(cleaned) => Some(cleaned),
        };
        let Some(cleaned) = cleaned else {
            self.text = raw;
            return;
        };

        // The editor reports the column as a byte index into the line.
        let (line, column) = self.editor.cursor_position();
        let column = char_column(&raw, line, column);
        let target_line = collapsed_line_index(&raw, line);
        self.editor = Content::with_text(&cleaned);
        let offset = cursor_offset(&cleaned, target_line, column);
        self.editor.perform(Action::Move(Motion::DocumentStart));
        for _ in 0..offset {
            self.editor.perform(Action::Move(Motion::Right));
        }
        debug!(
            removed = raw.len() - cleaned.len(),
            line = target_line,
            "Collapsed repeated newlines in editor"
        );
        self.text = cleaned;
    }

    pub(in crate::app::update) fn handle_recipient_name_changed(&mut self, name: String) {
        self.settings.recipient_name = name;
    }

    pub(in crate::app::update) fn handle_body_font_size_changed(&mut self, size: f32) {
        if self.settings.set_body_font_size(size) {
            debug!(
                body_font_size = self.settings.body_font_size,
                "Body font size changed"
            );
        }
    }

    pub(in crate::app::update) fn handle_title_font_size_changed(&mut self, size: f32) {
        if self.settings.set_title_font_size(size) {
            debug!(
                title_font_size = self.settings.title_font_size,
                "Title font size changed"
            );
        }
    }
}

/// Convert a byte column on `line` of `text` into a character count.
fn char_column(text: &str, line: usize, byte_column: usize) -> usize {
    text.split('\n').nth(line).map_or(0, |segment| {
        segment
            .get(..byte_column)
            .map_or_else(|| segment.chars().count(), |prefix| prefix.chars().count())
    })
}

/// Number of single-character steps from the document start to `column` on
/// `line`, clamped to the line's length.
fn cursor_offset(text: &str, line: usize, column: usize) -> usize {
    let before: usize = text
        .split('\n')
        .take(line)
        .map(|segment| segment.chars().count() + 1)
        .sum();
    let line_len = text
        .split('\n')
        .nth(line)
        .map_or(0, |segment| segment.chars().count());
    before + column.min(line_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use iced::widget::text_editor::Edit;
    use std::sync::Arc;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), String::new());
        app
    }

    #[test]
    fn cursor_offset_counts_characters_not_bytes() {
        assert_eq!(cursor_offset("一二三\n四五", 1, 1), 5);
        assert_eq!(cursor_offset("一二三\n四五", 1, 9), 6);
        assert_eq!(cursor_offset("abc\n", 1, 0), 4);
    }

    #[test]
    fn char_column_converts_byte_offsets() {
        assert_eq!(char_column("一二三\n乙二", 0, 9), 3);
        assert_eq!(char_column("一二三\n乙二", 1, 3), 1);
        assert_eq!(char_column("abc", 0, 2), 2);
        assert_eq!(char_column("abc", 4, 2), 0);
        assert_eq!(char_column("一二", 0, 99), 2);
    }

    #[test]
    fn pasted_blank_run_collapses_and_keeps_cursor_after_paste() {
        let (mut app, _task) = App::bootstrap(AppConfig::default(), "一二\n三四".to_string());
        app.reduce(Message::TextEdited(Action::Move(Motion::Right)));
        app.reduce(Message::TextEdited(Action::Edit(Edit::Paste(Arc::new(
            "甲\n\n\n乙".to_string(),
        )))));

        assert!(!app.text.contains("\n\n"));
        assert_eq!(app.editor.cursor_position(), (1, "乙".len()));

        app.reduce(Message::TextEdited(Action::Edit(Edit::Insert('丙'))));
        assert_eq!(app.text.trim_end_matches('\n'), "一甲\n乙丙二\n三四");
    }

    #[test]
    fn every_edit_is_sanitized() {
        let (mut app, _task) = App::bootstrap(
            AppConfig::default(),
            "一、整體運勢分析\n今年運勢佳".to_string(),
        );
        app.reduce(Message::TextEdited(Action::Move(Motion::DocumentEnd)));
        app.reduce(Message::TextEdited(Action::Edit(Edit::Enter)));
        app.reduce(Message::TextEdited(Action::Edit(Edit::Enter)));
        assert!(!app.text.contains("\n\n"));
        assert_eq!(app.styled_paragraphs().len(), 2);

        app.reduce(Message::TextEdited(Action::Edit(Edit::Paste(Arc::new(
            "甲\n\n\n乙".to_string(),
        )))));
        assert!(!app.text.contains("\n\n"));
        let contents: Vec<_> = app
            .styled_paragraphs()
            .into_iter()
            .map(|p| p.content)
            .collect();
        assert_eq!(contents, ["一、整體運勢分析", "今年運勢佳", "甲", "乙"]);
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut app = build_test_app();
        app.reduce(Message::BodyFontSizeChanged(2.6));
        assert_eq!(app.settings.body_font_size, 2.0);
        app.reduce(Message::BodyFontSizeChanged(0.4));
        assert_eq!(app.settings.body_font_size, 1.0);
        app.reduce(Message::TitleFontSizeChanged(3.4));
        assert_eq!(app.settings.title_font_size, 3.0);
    }

    #[test]
    fn body_size_change_restyles_every_paragraph() {
        let (mut app, _task) = App::bootstrap(
            AppConfig::default(),
            "一、整體運勢分析\n今年運勢佳".to_string(),
        );
        app.reduce(Message::BodyFontSizeChanged(1.2));
        let paragraphs = app.styled_paragraphs();
        assert!((paragraphs[0].font_size_rem - 1.4).abs() < 1e-5);
        assert!((paragraphs[1].font_size_rem - 1.2).abs() < 1e-5);
    }

    #[test]
    fn recipient_name_is_stored_verbatim() {
        let mut app = build_test_app();
        app.reduce(Message::RecipientNameChanged(" 阿杰 ".to_string()));
        assert_eq!(app.settings.recipient_name, " 阿杰 ");
    }
}
