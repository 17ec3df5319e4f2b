//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every contact operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! [`RolodexApi`] owns the session:
//! - the [`AddressBook`] loaded at [`RolodexApi::open`],
//! - the [`BookStore`] it came from and goes back to on [`RolodexApi::save`],
//! - the page size used by listing commands,
//! - a dirty flag, so callers can skip writing an unchanged book.
//!
//! Each method dispatches to one command function and returns its
//! `CmdResult`. No business rules and no terminal I/O live here.
//!
//! ## Generic Over BookStore
//!
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use log::{debug, warn};

pub struct RolodexApi<S: BookStore> {
    store: S,
    book: AddressBook,
    page_size: usize,
    dirty: bool,
}

impl<S: BookStore> RolodexApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        let book = store.load()?;
        debug!("session opened with {} contacts", book.len());
        if page_size == 0 {
            warn!("page size 0 requested, using 1");
        }
        Ok(Self {
            store,
            book,
            page_size: page_size.max(1),
            dirty: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the book back to the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.book)?;
        self.dirty = false;
        Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Saved {} contacts",
            self.book.len()
        ))))
    }

    /// Saves only when something changed since the last load or save.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::contacts::add(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contacts::delete(&mut self.book, name);
        self.track(result)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::phones::change(&mut self.book, name, old, new);
        self.track(result)
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::show(&self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let result = commands::birthdays::set(&mut self.book, name, date);
        self.track(result)
    }

    pub fn birthdays_in(&self, days: i64) -> Result<CmdResult> {
        self.birthdays_in_from(days, Local::now().date_naive())
    }

    pub fn birthdays_in_from(&self, days: i64, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::upcoming(&self.book, days, today, self.page_size)
    }

    pub fn set_note(&mut self, name: &str, text: &str, tag: &str) -> Result<CmdResult> {
        let result = commands::notes::set(&mut self.book, name, text, tag);
        self.track(result)
    }

    pub fn update_note(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::notes::update(&mut self.book, name, old, new);
        self.track(result)
    }

    pub fn delete_note(&mut self, name: &str, text: &str) -> Result<CmdResult> {
        let result = commands::notes::delete(&mut self.book, name, text);
        self.track(result)
    }

    pub fn update_tag(&mut self, name: &str, text: &str, tag: &str) -> Result<CmdResult> {
        let result = commands::notes::update_tag(&mut self.book, name, text, tag);
        self.track(result)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.book, self.page_size)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, term, self.page_size)
    }

    fn track(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        if matches!(&result, Ok(r) if r.changed) {
            self.dirty = true;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> RolodexApi<InMemoryStore> {
        RolodexApi::open(InMemoryStore::new(), 2).unwrap()
    }

    #[test]
    fn open_loads_previous_snapshot() {
        let mut first = api();
        first.add_contact("Bob", "0123456789").unwrap();
        first.save().unwrap();

        let mut store = InMemoryStore::new();
        store.set_raw_snapshot(first.store().raw_snapshot().unwrap());
        let second = RolodexApi::open(store, 10).unwrap();
        assert!(second.book().contains("Bob"));
        assert!(!second.is_dirty());
    }

    #[test]
    fn mutations_mark_dirty_and_save_clears() {
        let mut api = api();
        assert!(!api.is_dirty());

        api.add_contact("Bob", "0123456789").unwrap();
        assert!(api.is_dirty());

        assert!(api.save_if_dirty().unwrap());
        assert!(!api.is_dirty());
        assert!(!api.save_if_dirty().unwrap());
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn failed_and_read_only_commands_do_not_mark_dirty() {
        let mut api = api();
        assert!(api.add_contact("Bob", "nope").is_err());
        assert!(api.phones("Bob").is_err());
        api.list().unwrap();
        assert!(!api.is_dirty());
    }

    #[test]
    fn list_uses_configured_page_size() {
        let mut api = api();
        for (name, phone) in [
            ("A", "0000000001"),
            ("B", "0000000002"),
            ("C", "0000000003"),
        ] {
            api.add_contact(name, phone).unwrap();
        }
        let pages = api.list().unwrap().listing.unwrap();
        assert_eq!(pages.page_count(), 2);
    }

    #[test]
    fn dispatches_note_and_birthday_commands() {
        let mut api = api();
        api.add_contact("Bob", "0123456789").unwrap();
        api.set_birthday("Bob", "2000-01-03").unwrap();
        api.set_note("Bob", "call", "work").unwrap();
        api.update_note("Bob", "call", "call back").unwrap();
        api.update_tag("Bob", "call back", "home").unwrap();

        let bob = api.book().find("Bob").unwrap();
        assert_eq!(bob.note_tag("call back").unwrap().value(), "home");

        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = api.birthdays_in_from(2, today).unwrap();
        assert_eq!(result.listing.unwrap().count(), 1);

        api.delete_note("Bob", "call back").unwrap();
        api.delete_contact("Bob").unwrap();
        assert!(api.book().is_empty());
    }

    #[test]
    fn save_failure_keeps_book_dirty() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut api = RolodexApi::open(store, 10).unwrap();
        api.add_contact("Bob", "0123456789").unwrap();

        assert!(api.save().is_err());
        assert!(api.is_dirty());
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let api = RolodexApi::open(InMemoryStore::new(), 0).unwrap();
        assert_eq!(api.page_size(), 1);
    }
}
