use super::super::state::{Alert, App, PROMPT_COPIED_MESSAGE, PROMPT_FAILED_MESSAGE};
use super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app::update) fn handle_copy_prompt_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.prompt.loading {
            debug!("Prompt copy already in flight; ignoring request");
            return;
        }
        self.prompt.loading = true;
        effects.push(Effect::LoadPrompt);
    }

    pub(in crate::app::update) fn handle_prompt_loaded(
        &mut self,
        result: Result<String, String>,
        effects: &mut Vec<Effect>,
    ) {
        self.prompt.loading = false;
        match result {
            Ok(contents) => {
                info!(
                    chars = contents.chars().count(),
                    "Copying prompt to clipboard"
                );
                self.alert = Some(Alert::success(PROMPT_COPIED_MESSAGE));
                effects.push(Effect::WriteClipboard(contents));
            }
            Err(err) => {
                warn!(source = %self.config.prompt_source, "Prompt copy failed: {err}");
                self.alert = Some(Alert::failure(PROMPT_FAILED_MESSAGE));
            }
        }
    }
}
