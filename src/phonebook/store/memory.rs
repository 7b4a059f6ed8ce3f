use super::{AddOutcome, DuplicatePolicy, EditStatus};
use crate::error::{PhonebookError, Result};
use crate::model::Record;

/// In-memory collection of contact records, in insertion order.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    policy: DuplicatePolicy,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn add_record(&mut self, record: Record) -> Result<AddOutcome> {
        match self.position(record.name.as_str()) {
            None => {
                self.records.push(record);
                Ok(AddOutcome::Added)
            }
            Some(pos) => match self.policy {
                DuplicatePolicy::Overwrite => {
                    self.records[pos] = record;
                    Ok(AddOutcome::Replaced)
                }
                DuplicatePolicy::Reject => {
                    Err(PhonebookError::DuplicateName(record.name.to_string()))
                }
            },
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == *name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == *name)
    }

    /// Removes the record named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|pos| self.records.remove(pos))
    }

    pub fn edit_record(&mut self, name: &str, old: &str, new: &str) -> Result<EditStatus> {
        let Some(record) = self.find_mut(name) else {
            return Ok(EditStatus::NotFound);
        };
        if record.edit_phone(old, new)? {
            Ok(EditStatus::Changed)
        } else {
            Ok(EditStatus::NotFound)
        }
    }

    pub fn show_all(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == *name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_policy(policy: DuplicatePolicy) -> Self {
            Self {
                book: AddressBook::with_policy(policy),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name, None).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record).unwrap();
            self
        }

        /// Adds `count` contacts named `contact1`.. with one generated phone each.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let phone = format!("{:010}", i + 1);
                let record = Record::new(format!("contact{}", i + 1), Some(phone.as_str())).unwrap();
                self.book.add_record(record).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn names(book: &AddressBook) -> Vec<&str> {
        book.show_all().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn add_and_find() {
        let mut book = AddressBook::new();
        let outcome = book
            .add_record(Record::new("john", Some("1234567890")).unwrap())
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(
            book.find("john").unwrap().to_string(),
            "Contact name: john, phones: 1234567890"
        );
        assert!(book.contains("john"));
    }

    #[test]
    fn find_unknown_is_none() {
        let fixture = StoreFixture::new().with_contacts(2);
        assert!(fixture.book.find("nobody").is_none());
        assert!(!fixture.book.contains("nobody"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let fixture = StoreFixture::new().with_contact("John", &["1234567890"]);
        assert!(fixture.book.find("john").is_none());
        assert!(fixture.book.find("John ").is_none());
        assert!(fixture.book.find("John").is_some());
    }

    #[test]
    fn overwrite_policy_replaces_in_place() {
        let mut book = StoreFixture::new()
            .with_contact("a", &["1111111111"])
            .with_contact("b", &["2222222222"])
            .book;
        let outcome = book
            .add_record(Record::new("a", Some("3333333333")).unwrap())
            .unwrap();
        assert_eq!(outcome, AddOutcome::Replaced);
        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["a", "b"]);
        assert_eq!(book.find("a").unwrap().phones[0].as_str(), "3333333333");
    }

    #[test]
    fn reject_policy_keeps_original() {
        let mut book = StoreFixture::with_policy(DuplicatePolicy::Reject)
            .with_contact("a", &["1111111111"])
            .book;
        match book.add_record(Record::new("a", Some("3333333333")).unwrap()) {
            Err(PhonebookError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("expected DuplicateName, got {:?}", other),
        }
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("a").unwrap().phones[0].as_str(), "1111111111");
    }

    #[test]
    fn delete_existing_and_missing() {
        let mut book = StoreFixture::new().with_contacts(3).book;
        let removed = book.delete("contact2").unwrap();
        assert_eq!(removed.name.as_str(), "contact2");
        assert_eq!(names(&book), vec!["contact1", "contact3"]);

        assert!(book.delete("contact2").is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn edit_record_statuses() {
        let mut book = StoreFixture::new()
            .with_contact("jane", &["1234567890", "0987654321"])
            .book;

        let status = book.edit_record("jane", "1234567890", "1112223334").unwrap();
        assert_eq!(status, EditStatus::Changed);
        assert_eq!(status.to_string(), "Record change");
        assert_eq!(
            book.find("jane").unwrap().to_string(),
            "Contact name: jane, phones: 1112223334; 0987654321"
        );

        let status = book.edit_record("jane", "5555555555", "1112223334").unwrap();
        assert_eq!(status, EditStatus::NotFound);
        assert_eq!(status.to_string(), "Record not found");

        let status = book.edit_record("nobody", "1112223334", "1234567890").unwrap();
        assert_eq!(status, EditStatus::NotFound);
    }

    #[test]
    fn edit_record_invalid_new_phone() {
        let mut book = StoreFixture::new().with_contact("jane", &["1234567890"]).book;
        assert!(matches!(
            book.edit_record("jane", "1234567890", "oops"),
            Err(PhonebookError::InvalidPhone(_))
        ));
    }

    #[test]
    fn show_all_in_insertion_order() {
        let book = StoreFixture::new()
            .with_contact("zed", &[])
            .with_contact("amy", &[])
            .with_contact("max", &[])
            .book;
        assert_eq!(names(&book), vec!["zed", "amy", "max"]);

        let iterated: Vec<&str> = (&book).into_iter().map(|r| r.name.as_str()).collect();
        assert_eq!(iterated, vec!["zed", "amy", "max"]);
    }

    #[test]
    fn empty_book() {
        let book = StoreFixture::default().book;
        assert!(book.is_empty());
        assert_eq!(book.show_all().count(), 0);
        assert_eq!(book.policy(), DuplicatePolicy::Overwrite);
    }
}
