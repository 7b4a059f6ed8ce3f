//! # API Facade
//!
//! [`PhonebookApi`] owns the session state (the address book) and is the
//! single entry point a UI talks to. It takes raw input lines and returns
//! structured [`CmdResult`] values; it never prints and never fails.
//!
//! Parsing and dispatch live in [`crate::commands`]; this layer only wires
//! them to the book and logs what ran.

use crate::commands::{self, CmdResult};
use crate::config::PhonebookConfig;
use crate::store::{AddressBook, DuplicatePolicy};
use tracing::debug;

pub struct PhonebookApi {
    book: AddressBook,
}

impl Default for PhonebookApi {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

impl PhonebookApi {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            book: AddressBook::with_policy(policy),
        }
    }

    pub fn from_config(config: &PhonebookConfig) -> Self {
        Self::new(config.on_duplicate)
    }

    /// Runs one line of user input. A blank line yields an empty result.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let Some(input) = commands::parse_input(line) else {
            return CmdResult::default();
        };
        debug!(command = %input.command, args = input.args.len(), "dispatching");
        let result = commands::dispatch(&mut self.book, &input);
        debug!(
            records = self.book.len(),
            exit = result.exit,
            "command finished"
        );
        result
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
