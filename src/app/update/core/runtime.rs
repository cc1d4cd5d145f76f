use super::super::super::messages::Message;
use super::super::super::state::{App, PREVIEW_ID};
use super::super::Effect;
use crate::export::run_export;
use crate::prompt::{PromptSource, load_prompt};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::container;
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ResolvePreviewBounds { request_id } => {
                container::visible_bounds(PREVIEW_ID.clone())
                    .map(move |bounds| Message::PreviewBoundsResolved { request_id, bounds })
            }
            Effect::CaptureWindow { request_id } => window::get_latest()
                .and_then(window::screenshot)
                .map(move |screenshot| Message::ScreenshotCaptured {
                    request_id,
                    screenshot,
                }),
            Effect::ArmExportTimeout { request_id } => {
                let timeout = self.export_timeout();
                Task::perform(tokio::time::sleep(timeout), move |()| {
                    Message::ExportTimedOut { request_id }
                })
            }
            Effect::EncodeExport { request_id, job } => {
                info!(
                    request_id,
                    directory = %job.directory.display(),
                    file_name = job.file_name,
                    "Dispatching export encode task"
                );
                Task::perform(
                    async move { run_export(&job).map_err(|err| format!("{err:#}")) },
                    move |result| Message::ExportFinished { request_id, result },
                )
            }
            Effect::LoadPrompt => {
                let source = PromptSource::parse(&self.config.prompt_source);
                let timeout = self.prompt_timeout();
                info!(%source, "Dispatching prompt load task");
                Task::perform(
                    async move {
                        load_prompt(source, timeout)
                            .await
                            .map_err(|err| format!("{err:#}"))
                    },
                    Message::PromptLoaded,
                )
            }
            Effect::WriteClipboard(contents) => iced::clipboard::write(contents),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized { width: size.width })
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
