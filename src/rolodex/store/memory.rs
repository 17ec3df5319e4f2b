use super::{check_version, snapshot_of, BookStore, Snapshot};
use crate::book::AddressBook;
use crate::error::{Result, RolodexError};

/// In-memory storage for testing and development.
///
/// Keeps the serialized snapshot rather than the book itself so the serde
/// path is exercised exactly as it is with a file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw_snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Replace the stored snapshot with arbitrary text.
    pub fn set_raw_snapshot(&mut self, raw: impl Into<String>) {
        self.snapshot = Some(raw.into());
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.snapshot {
            None => Ok(AddressBook::new()),
            Some(raw) => {
                let snapshot: Snapshot =
                    serde_json::from_str(raw).map_err(RolodexError::Serialization)?;
                check_version(snapshot)
            }
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if self.simulate_write_error {
            return Err(RolodexError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string(&snapshot_of(book)).map_err(RolodexError::Serialization)?;
        self.snapshot = Some(raw);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::model::Record;

    /// Builder for address books used across command and API tests.
    #[derive(Default)]
    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record =
                    Record::new(format!("Contact {}", i + 1)).expect("fixture name is valid");
                record
                    .add_phone(&format!("{:010}", i + 1))
                    .expect("fixture phone is valid");
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).expect("fixture name is valid");
            for phone in phones {
                record.add_phone(phone).expect("fixture phone is valid");
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            if let Some(record) = self.book.find_mut(name) {
                record
                    .add_birthday(birthday)
                    .expect("fixture birthday is valid");
            }
            self
        }

        pub fn with_note(mut self, name: &str, text: &str, tag: &str) -> Self {
            if let Some(record) = self.book.find_mut(name) {
                record.add_note(text, tag).expect("fixture tag is valid");
            }
            self
        }

        pub fn build(self) -> AddressBook {
            self.book
        }
    }
}
