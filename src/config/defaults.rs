pub(crate) fn default_recipient_name() -> String {
    "王小明".to_string()
}

pub(crate) fn default_body_font_size() -> f32 {
    1.5
}

pub(crate) fn default_title_font_size() -> f32 {
    1.8
}

pub(crate) fn default_title_suffix() -> String {
    " 的流年運勢報告書".to_string()
}

pub(crate) fn default_background_image() -> String {
    "public/bg-card.png".to_string()
}

pub(crate) fn default_text_color() -> String {
    "#000000".to_string()
}

pub(crate) fn default_rem_px() -> f32 {
    16.0
}

pub(crate) fn default_timeout_secs() -> f32 {
    10.0
}

pub(crate) fn default_prompt_source() -> String {
    "public/gpt.txt".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    1000.0
}

pub(crate) fn default_key_export() -> String {
    "ctrl+s".to_string()
}

pub(crate) fn default_key_copy_prompt() -> String {
    "ctrl+shift+c".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
