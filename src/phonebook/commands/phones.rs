use super::{expect_args, CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::store::{AddressBook, EditStatus};

const RECORD_NOT_FOUND: &str = "Record not found";

pub fn add_phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok(CmdResult::message(CmdMessage::success("Phone added.")))
        }
        None => Ok(CmdResult::message(CmdMessage::warning(RECORD_NOT_FOUND))),
    }
}

pub fn delete_phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);
    match book.find_mut(name) {
        Some(record) => {
            record.remove_phone(phone);
            Ok(CmdResult::message(CmdMessage::success("Phone deleted.")))
        }
        None => Ok(CmdResult::message(CmdMessage::warning(RECORD_NOT_FOUND))),
    }
}

/// Handles both `edit` and `edit_phone`.
pub fn edit_phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    expect_args(args, 3)?;
    let status = book.edit_record(&args[0], &args[1], &args[2])?;
    let message = match status {
        EditStatus::Changed => CmdMessage::success(status.to_string()),
        EditStatus::NotFound => CmdMessage::warning(status.to_string()),
    };
    Ok(CmdResult::message(message))
}

pub fn find_phone(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);
    let record = book
        .find(name)
        .ok_or_else(|| PhonebookError::NameNotFound(name.clone()))?;
    match record.find_phone(phone) {
        Some(found) => Ok(CmdResult::message(CmdMessage::info(format!(
            "{}: {}",
            record.name, found
        )))),
        None => Ok(CmdResult::message(CmdMessage::warning("Phone not found"))),
    }
}
