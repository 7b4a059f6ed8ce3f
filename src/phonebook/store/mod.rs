//! # Storage Layer
//!
//! Contacts live only in memory for the lifetime of the process. The
//! [`AddressBook`] keeps records in insertion order and guarantees that no
//! two records share a name.
//!
//! ## Duplicate Names
//!
//! What happens when a record is added under a name that already exists is
//! decided by [`DuplicatePolicy`], chosen at construction time (normally from
//! the config file):
//!
//! - `Overwrite` (default): the new record replaces the old one, keeping its
//!   position in listings.
//! - `Reject`: the add fails with [`PhonebookError::DuplicateName`] and the
//!   existing record is left untouched.
//!
//! [`PhonebookError::DuplicateName`]: crate::error::PhonebookError::DuplicateName

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod memory;

pub use memory::AddressBook;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Overwrite,
    Reject,
}

/// What `add_record` did with the record it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
}

/// Result of `edit_record`, displayed directly to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Changed,
    NotFound,
}

impl fmt::Display for EditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditStatus::Changed => f.write_str("Record change"),
            EditStatus::NotFound => f.write_str("Record not found"),
        }
    }
}
