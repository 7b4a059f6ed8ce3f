//! # Command Layer
//!
//! Every user command is a [`Handler`]: a plain function taking the
//! positional arguments and the address book, returning `Result<CmdResult>`.
//! Handlers are registered in [`COMMANDS`]; [`dispatch`] looks the command up,
//! runs it and turns any error into a message through [`render_error`], so
//! callers always get a `CmdResult` back.

use crate::error::{PhonebookError, Result};
use crate::model::Record;
use crate::store::AddressBook;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod phones;
pub mod records;
pub mod session;

pub const INVALID_COMMAND: &str = "Invalid command.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
    /// Set by `close`/`exit`; the session ends after this result is shown.
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}

/// A line of input split into a lower-cased command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Splits `line` on whitespace. Returns `None` for a blank line.
///
/// There is no quoting: `add "John Smith" ...` yields the name `"John`.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    Some(ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}

pub type Handler = fn(&[String], &mut AddressBook) -> Result<CmdResult>;

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
    pub handler: Handler,
}

/// All known commands, in the order `help` lists them.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        usage: "hello",
        about: "Say hello",
        handler: session::hello,
    },
    CommandSpec {
        name: "add",
        usage: "add <name> <phone>",
        about: "Add a contact with one phone",
        handler: records::add,
    },
    CommandSpec {
        name: "find",
        usage: "find <name>",
        about: "Show a contact",
        handler: records::find,
    },
    CommandSpec {
        name: "delete",
        usage: "delete <name>",
        about: "Delete a contact",
        handler: records::delete,
    },
    CommandSpec {
        name: "all",
        usage: "all",
        about: "Show every contact",
        handler: records::all,
    },
    CommandSpec {
        name: "add_phone",
        usage: "add_phone <name> <phone>",
        about: "Add a phone to a contact",
        handler: phones::add_phone,
    },
    CommandSpec {
        name: "delete_phone",
        usage: "delete_phone <name> <phone>",
        about: "Remove a phone from a contact",
        handler: phones::delete_phone,
    },
    CommandSpec {
        name: "edit_phone",
        usage: "edit_phone <name> <old> <new>",
        about: "Replace one of a contact's phones",
        handler: phones::edit_phone,
    },
    CommandSpec {
        name: "edit",
        usage: "edit <name> <old> <new>",
        about: "Same as edit_phone",
        handler: phones::edit_phone,
    },
    CommandSpec {
        name: "find_phone",
        usage: "find_phone <name> <phone>",
        about: "Check whether a contact has a phone",
        handler: phones::find_phone,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        about: "List commands",
        handler: session::help,
    },
    CommandSpec {
        name: "close",
        usage: "close",
        about: "Quit",
        handler: session::close,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        about: "Quit",
        handler: session::close,
    },
];

static COMMAND_TABLE: Lazy<HashMap<&'static str, Handler>> =
    Lazy::new(|| COMMANDS.iter().map(|c| (c.name, c.handler)).collect());

pub fn lookup(command: &str) -> Option<Handler> {
    COMMAND_TABLE.get(command).copied()
}

/// Runs a parsed command against `book`. Never fails: unknown commands and
/// handler errors come back as messages.
pub fn dispatch(book: &mut AddressBook, input: &ParsedInput) -> CmdResult {
    let Some(handler) = lookup(&input.command) else {
        return CmdResult::message(CmdMessage::warning(INVALID_COMMAND));
    };
    match handler(&input.args, book) {
        Ok(result) => result,
        Err(e) => CmdResult::message(error_message(&e)),
    }
}

/// The text shown to the user for a failed command.
pub fn render_error(err: &PhonebookError) -> String {
    match err {
        PhonebookError::InvalidPhone(_)
        | PhonebookError::ArgumentCount { .. }
        | PhonebookError::DuplicateName(_)
        | PhonebookError::DuplicatePhone { .. }
        | PhonebookError::NameNotFound(_)
        | PhonebookError::MissingArgument => err.to_string(),
        PhonebookError::Io(_) | PhonebookError::Serialization(_) | PhonebookError::Config(_) => {
            format!("Error: {}", err)
        }
    }
}

fn error_message(err: &PhonebookError) -> CmdMessage {
    let text = render_error(err);
    match err {
        PhonebookError::NameNotFound(_) | PhonebookError::MissingArgument => {
            CmdMessage::warning(text)
        }
        _ => CmdMessage::error(text),
    }
}

/// Fails with `ArgumentCount` unless exactly `expected` arguments were given.
pub(crate) fn expect_args(args: &[String], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(PhonebookError::ArgumentCount {
            expected,
            got: args.len(),
        })
    }
}

/// Positional argument `index`, or `MissingArgument`.
pub(crate) fn arg(args: &[String], index: usize) -> Result<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(PhonebookError::MissingArgument)
}
