//! Configuration loading for the card editor.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! defaults so the editor can still launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_hex_color, serialize_config};
pub use models::{AppConfig, FontWeight, Indent, LogLevel, ThemeMode};

#[cfg(test)]
pub use models::CardVariant;
