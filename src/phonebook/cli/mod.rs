//! # CLI Behavior
//!
//! This is **one possible UI client** for phonebook: an interactive prompt on
//! stdin/stdout. Everything it does to the address book goes through
//! [`phonebook::api::PhonebookApi`].
//!
//! ## Session
//!
//! ```text
//! $ phonebook
//! Welcome to the assistant bot!
//! Enter a command: add john 1234567890
//! Record added.
//! Enter a command: find john
//! Contact name: john, phones: 1234567890
//! Enter a command: close
//! Good bye!
//! ```
//!
//! Type `help` at the prompt for the list of commands. Input is split on
//! whitespace with no quoting, so names are single words.
//!
//! ## Module Structure
//!
//! - `commands`: process setup and the read-eval-print loop
//! - `render`: writing results to the terminal (text or JSON, colors)
//! - `setup`: process arguments via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
