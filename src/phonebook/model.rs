use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const PHONE_DIGITS: usize = 10;

/// A labeled string value stored on a record.
pub trait Field: fmt::Display {
    fn label(&self) -> &'static str;
    fn value(&self) -> &str;
}

/// Contact name. Compared by exact string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn label(&self) -> &'static str {
        "name"
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A phone number of exactly ten decimal digits.
///
/// There is no normalization: separators, spaces and country codes are all
/// rejected rather than stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(PhonebookError::InvalidPhone(value))
        }
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Phone::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Field for Phone {
    fn label(&self) -> &'static str {
        "phone"
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A contact: a name and its phones, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: impl Into<String>, phone: Option<&str>) -> Result<Self> {
        let phones = match phone {
            Some(raw) => vec![Phone::new(raw)?],
            None => Vec::new(),
        };
        Ok(Self {
            name: Name::new(name),
            phones,
        })
    }

    /// Appends the phone unless an equal one is already present.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Removes the first phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position(phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new` in place.
    ///
    /// Returns `Ok(false)` when `old` is not on the record. `new` is validated
    /// before the lookup, so an invalid replacement fails even if `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Phone::new(new)?;
        let Some(pos) = self.position(old) else {
            return Ok(false);
        };
        if old != new && self.phones.contains(&replacement) {
            return Err(PhonebookError::DuplicatePhone {
                name: self.name.to_string(),
                phone: replacement.to_string(),
            });
        }
        self.phones[pos] = replacement;
        Ok(true)
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
