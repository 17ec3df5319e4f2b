//! # Address Book
//!
//! [`AddressBook`] is the in-memory contact store: a mapping from contact name
//! to [`Record`] that remembers insertion order. Everything the application
//! does with contacts goes through it, and it is what gets persisted.
//!
//! ## Semantics
//!
//! - `add_record` inserts or overwrites by name. An overwrite replaces the
//!   whole record (phones and notes included) but keeps its original slot in
//!   the ordering.
//! - `delete` is a no-op for unknown names.
//! - `search_records` and `filter_by_birthday_offset` return *new* books
//!   holding copies of the matching records, in the original order.
//! - `paginate` snapshots the current records; see [`crate::paginate`].
//!
//! ## Serialization
//!
//! A book serializes as a plain array of records in insertion order.
//! Deserializing rejects two records with the same name rather than silently
//! keeping one of them.

use crate::error::{Result, RolodexError};
use crate::model::Record;
use crate::paginate::Paginator;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Record>", try_from = "Vec<Record>")]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts `record`, replacing (and returning) any record with the same name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().value().to_string();
        let replaced = self.records.insert(key.clone(), record);
        if replaced.is_none() {
            self.order.push(key);
        }
        replaced
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Contacts whose name contains `text` (ignoring case) or whose phones
    /// contain it literally.
    pub fn search_records(&self, text: &str) -> AddressBook {
        let needle = text.to_lowercase();
        self.records()
            .filter(|record| {
                record.name().value().to_lowercase().contains(&needle)
                    || record.phones().iter().any(|p| p.value().contains(text))
            })
            .cloned()
            .collect()
    }

    /// Contacts whose next birthday is exactly `days` away from today.
    pub fn filter_by_birthday_offset(&self, days: i64) -> AddressBook {
        self.filter_by_birthday_offset_from(days, Local::now().date_naive())
    }

    pub fn filter_by_birthday_offset_from(&self, days: i64, today: NaiveDate) -> AddressBook {
        self.records()
            .filter(|record| record.days_to_birthday_from(today) == Some(days))
            .cloned()
            .collect()
    }

    /// Pages of up to `page_size` records over a snapshot of the book.
    pub fn paginate(&self, page_size: usize) -> Paginator {
        Paginator::new(self.records().cloned().collect(), page_size)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(mut book: AddressBook) -> Self {
        book.order
            .iter()
            .filter_map(|key| book.records.remove(key))
            .collect()
    }
}

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = RolodexError;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        let mut book = AddressBook::new();
        for record in records {
            let name = record.name().value().to_string();
            if book.add_record(record).is_some() {
                return Err(RolodexError::Store(format!(
                    "Duplicate contact in snapshot: {name}"
                )));
            }
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for p in phones {
            record.add_phone(p).unwrap();
        }
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_then_find() {
        let mut book = AddressBook::new();
        for name in ["Alice", "Bob", "a b c", "Ünal"] {
            book.add_record(Record::new(name).unwrap());
            assert_eq!(book.find(name).unwrap().name().value(), name);
        }
        assert_eq!(book.len(), 4);
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn add_record_overwrites_and_keeps_slot() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", &["1111111111"]));
        book.add_record(contact("Bob", &["2222222222"]));

        let replaced = book.add_record(contact("Alice", &["3333333333"]));
        assert_eq!(replaced.unwrap().phones()[0].value(), "1111111111");

        assert_eq!(book.len(), 2);
        assert_eq!(book.names().collect::<Vec<_>>(), ["Alice", "Bob"]);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
        assert_eq!(
            book.find("Alice").unwrap().phones()[0].value(),
            "3333333333"
        );
    }

    #[test]
    fn delete_is_a_noop_for_unknown_names() {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", &[]));
        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);

        assert!(book.delete("Alice").is_some());
        assert!(book.is_empty());
        assert_eq!(book.names().count(), 0);
    }

    #[test]
    fn search_matches_name_case_insensitively_or_phone_literally() {
        let mut book = AddressBook::new();
        book.add_record(contact("Abcd", &["1112223333"]));
        book.add_record(contact("Xyz", &["0001112223"]));

        let found = book.search_records("abc");
        assert_eq!(found.names().collect::<Vec<_>>(), ["Abcd"]);

        let found = book.search_records("111222");
        assert_eq!(found.names().collect::<Vec<_>>(), ["Abcd", "Xyz"]);

        let found = book.search_records("XY");
        assert_eq!(found.names().collect::<Vec<_>>(), ["Xyz"]);

        assert!(book.search_records("nothing").is_empty());
    }

    #[test]
    fn search_returns_independent_copies() {
        let mut book = AddressBook::new();
        book.add_record(contact("Abcd", &["1112223333"]));
        let mut found = book.search_records("ab");
        found.find_mut("Abcd").unwrap().add_phone("9999999999").unwrap();
        assert_eq!(book.find("Abcd").unwrap().phones().len(), 1);
    }

    #[test]
    fn birthday_filter_uses_exact_equality() {
        let mut book = AddressBook::new();
        let mut soon = contact("Soon", &[]);
        soon.add_birthday("1990-01-06").unwrap();
        let mut later = contact("Later", &[]);
        later.add_birthday("1990-01-07").unwrap();
        book.add_record(soon);
        book.add_record(later);
        book.add_record(contact("Unknown", &[]));

        let today = date(2024, 1, 1);
        let found = book.filter_by_birthday_offset_from(5, today);
        assert_eq!(found.names().collect::<Vec<_>>(), ["Soon"]);
        assert!(book.filter_by_birthday_offset_from(4, today).is_empty());
    }

    #[test]
    fn paginate_yields_pages_in_insertion_order() {
        let book: AddressBook = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|n| contact(n, &[]))
            .collect();

        let pages: Vec<Vec<String>> = book
            .paginate(2)
            .map(|page| page.iter().map(|r| r.name().to_string()).collect())
            .collect();
        assert_eq!(pages, [vec!["A", "B"], vec!["C", "D"], vec!["E"]]);
    }

    #[test]
    fn paginate_is_a_snapshot() {
        let mut book: AddressBook = ["A", "B", "C"].iter().map(|n| contact(n, &[])).collect();
        let mut pages = book.paginate(2);
        book.add_record(contact("D", &[]));
        book.delete("A");

        let first = pages.next().unwrap();
        assert_eq!(first[0].name().value(), "A");
        assert_eq!(pages.count(), 1);
        assert_eq!(book.paginate(2).count(), 2);
    }

    #[test]
    fn empty_book_has_no_pages() {
        assert_eq!(AddressBook::new().paginate(10).count(), 0);
    }

    #[test]
    fn serializes_as_ordered_array() {
        let mut book = AddressBook::new();
        book.add_record(contact("Zed", &["1111111111"]));
        book.add_record(contact("Amy", &[]));

        let json = serde_json::to_value(&book).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Zed", "Amy"]);

        let back: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn deserializing_duplicate_names_fails() {
        let json = r#"[{"name": "Bob"}, {"name": "Bob"}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }
}
