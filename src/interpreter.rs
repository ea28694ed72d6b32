//! Interactive command interpreter.
//!
//! Reads one line at a time, dispatches it to a handler and prints the reply.
//! The interpreter owns the contact repository for the whole session.

use crate::clock::{Clock, SystemClock};
use crate::commands::{catch_errors, handlers, parse_input, Command};
use crate::config::Config;
use crate::repositories::{AddressBook, ContactRepository};
use crate::services::BirthdayWindow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Lifecycle of an interpreter session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    /// Accepting input
    Running,
    /// `close`/`exit` was entered or input ended
    Terminated,
}

/// The assistant bot's read-eval-print loop.
pub struct Interpreter<R = AddressBook, C = SystemClock> {
    book: R,
    clock: C,
    window: BirthdayWindow,
    state: InterpreterState,
}

impl Interpreter {
    /// Create an interpreter with an empty address book and the system clock.
    pub fn new(config: &Config) -> Self {
        Self::with_parts(AddressBook::new(), SystemClock, config.birthday_window())
    }
}

impl<R: ContactRepository, C: Clock> Interpreter<R, C> {
    /// Create an interpreter from explicit parts.
    pub fn with_parts(book: R, clock: C, window: BirthdayWindow) -> Self {
        Self {
            book,
            clock,
            window,
            state: InterpreterState::Running,
        }
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn book(&self) -> &R {
        &self.book
    }

    /// Execute one input line and return the reply to print.
    ///
    /// Blank lines produce no reply.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        let parsed = parse_input(line)?;
        let args = parsed.args.as_slice();
        let command = &parsed.command;
        debug!(command = %command.name(), args = args.len(), "Dispatching command");

        let book = &mut self.book;
        let reply = match command {
            Command::Exit => {
                self.state = InterpreterState::Terminated;
                FAREWELL.to_string()
            }
            Command::Hello => catch_errors(command, handlers::hello),
            Command::Add => catch_errors(command, || handlers::add_contact(args, book)),
            Command::Change => catch_errors(command, || handlers::change_phone(args, book)),
            Command::Phone => catch_errors(command, || handlers::show_phone(args, book)),
            Command::All => catch_errors(command, || handlers::show_all(book)),
            Command::AddBirthday => catch_errors(command, || handlers::add_birthday(args, book)),
            Command::ShowBirthday => {
                catch_errors(command, || handlers::show_birthday(args, book))
            }
            Command::Birthdays => {
                let today = self.clock.today();
                let window = &self.window;
                catch_errors(command, || handlers::upcoming_birthdays(book, today, window))
            }
            Command::Unknown(keyword) => {
                debug!(keyword = %keyword, "Unknown command");
                INVALID_COMMAND.to_string()
            }
        };

        Some(reply)
    }

    /// Run the loop over `input` until `close`/`exit` or end of input.
    ///
    /// Only I/O failures are returned; command failures are printed.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> io::Result<()> {
        info!("Starting interactive session");
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        while self.state == InterpreterState::Running {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input");
                writeln!(output)?;
                self.state = InterpreterState::Terminated;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(reply) = self.execute(&line) {
                writeln!(output, "{}", reply)?;
            }
        }

        output.flush()?;
        info!(contacts = self.book.contacts().len(), "Session finished");
        Ok(())
    }
}
