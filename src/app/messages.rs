use iced::Rectangle;
use iced::keyboard::{Key, Modifiers};
use iced::widget::text_editor;
use iced::window::Screenshot;
use std::path::PathBuf;

/// Messages emitted by the UI and by finished background work.
#[derive(Debug, Clone)]
pub enum Message {
    TextEdited(text_editor::Action),
    RecipientNameChanged(String),
    BodyFontSizeChanged(f32),
    TitleFontSizeChanged(f32),
    ExportRequested,
    PreviewBoundsResolved {
        request_id: u64,
        bounds: Option<Rectangle>,
    },
    ScreenshotCaptured {
        request_id: u64,
        screenshot: Screenshot,
    },
    ExportFinished {
        request_id: u64,
        result: Result<PathBuf, String>,
    },
    ExportTimedOut {
        request_id: u64,
    },
    CopyPromptRequested,
    PromptLoaded(Result<String, String>),
    DismissAlert,
    WindowResized {
        width: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
