//! Application service layer.
//!
//! Date logic that sits between the stored contacts and the command handlers.

mod birthday_window;

pub use birthday_window::{BirthdayRule, BirthdayWindow, DEFAULT_WINDOW_DAYS};
