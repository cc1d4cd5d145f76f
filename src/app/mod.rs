mod messages;
mod state;
mod update;
mod view;

pub use state::App;
pub(crate) use state::SAMPLE_TEXT;

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};

/// Helper to launch the editor with the provided starting text.
pub fn run_app(config: AppConfig, text: String) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("命理小卡編輯器", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| match app.config.theme {
            ThemeMode::Day => Theme::Light,
            ThemeMode::Night => Theme::Dark,
        })
        .run_with(move || App::bootstrap(config, text))
}
