use super::{arg, CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use crate::store::{AddOutcome, AddressBook};

/// `add <name> <phone>`. Too few arguments is `MissingArgument`, too many is
/// `ArgumentCount`.
pub fn add(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;
    if args.len() > 2 {
        return Err(PhonebookError::ArgumentCount {
            expected: 2,
            got: args.len(),
        });
    }
    let record = Record::new(name, Some(phone))?;
    let message = match book.add_record(record)? {
        AddOutcome::Added => "Record added.",
        AddOutcome::Replaced => "Record updated.",
    };
    Ok(CmdResult::message(CmdMessage::success(message)))
}

pub fn find(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    match book.find(name) {
        Some(record) => Ok(CmdResult::default().with_listed_records(vec![record.clone()])),
        None => Ok(CmdResult::message(CmdMessage::warning("Record not found"))),
    }
}

pub fn delete(args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    match book.delete(name) {
        Some(_) => Ok(CmdResult::message(CmdMessage::success("Record deleted."))),
        None => Ok(CmdResult::message(CmdMessage::warning("Record not found"))),
    }
}

pub fn all(_args: &[String], book: &mut AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No records found.")));
    }
    Ok(CmdResult::default().with_listed_records(book.show_all().cloned().collect()))
}
