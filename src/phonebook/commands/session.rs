use super::{CmdMessage, CmdResult, COMMANDS};
use crate::error::Result;
use crate::store::AddressBook;

pub const FAREWELL: &str = "Good bye!";

pub fn hello(_args: &[String], _book: &mut AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("How can I help you?")))
}

pub fn help(_args: &[String], _book: &mut AddressBook) -> Result<CmdResult> {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut result = CmdResult::default();
    for spec in COMMANDS {
        result.add_message(CmdMessage::info(format!(
            "{:<width$}  {}",
            spec.usage,
            spec.about,
            width = width
        )));
    }
    Ok(result)
}

/// Handles both `close` and `exit`.
pub fn close(_args: &[String], _book: &mut AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info(FAREWELL)).with_exit())
}
