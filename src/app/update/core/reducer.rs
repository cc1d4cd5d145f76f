use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app::update) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::TextEdited(action) => self.handle_text_edited(action),
            Message::RecipientNameChanged(name) => self.handle_recipient_name_changed(name),
            Message::BodyFontSizeChanged(size) => self.handle_body_font_size_changed(size),
            Message::TitleFontSizeChanged(size) => self.handle_title_font_size_changed(size),
            Message::ExportRequested => self.handle_export_requested(&mut effects),
            Message::PreviewBoundsResolved { request_id, bounds } => {
                self.handle_preview_bounds_resolved(request_id, bounds, &mut effects);
            }
            Message::ScreenshotCaptured {
                request_id,
                screenshot,
            } => self.handle_screenshot_captured(request_id, screenshot, &mut effects),
            Message::ExportFinished { request_id, result } => {
                self.handle_export_finished(request_id, result);
            }
            Message::ExportTimedOut { request_id } => self.handle_export_timed_out(request_id),
            Message::CopyPromptRequested => self.handle_copy_prompt_requested(&mut effects),
            Message::PromptLoaded(result) => self.handle_prompt_loaded(result, &mut effects),
            Message::DismissAlert => {
                if self.alert.take().is_some() {
                    debug!("Dismissed alert");
                }
            }
            Message::WindowResized { width } => {
                self.window.width = width;
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }
}
