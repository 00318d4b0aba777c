//! Diagnostics for the terminal. Everything here goes to stderr so that
//! stdout only ever carries command output.

use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}
