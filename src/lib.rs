//! Assistant Bot - an interactive command-line contact manager.
//!
//! Contacts (names, phone numbers and birthdays) live in memory for the
//! duration of one session. The bot reads commands line by line, applies them
//! to the address book and prints a plain-text reply.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Birthday`)
//! - **models**: The `Contact` record
//! - **repositories**: The `ContactRepository` trait and the in-memory `AddressBook`
//! - **services**: Upcoming-birthday window rules
//! - **commands**: Input parsing, per-command handlers and the error-catching combinator
//! - **interpreter**: The read-eval-print loop
//! - **config** / **error** / **clock**: Settings, error types and the source of "today"

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod repositories;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{catch_errors, Command};
pub use config::Config;
pub use domain::{Birthday, ValidationError};
pub use error::{CommandError, ConfigError};
pub use interpreter::{Interpreter, InterpreterState};
pub use models::Contact;
pub use repositories::{AddressBook, ContactRepository};
pub use services::{BirthdayRule, BirthdayWindow};
