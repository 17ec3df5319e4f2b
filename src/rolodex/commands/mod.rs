//! # Command Layer
//!
//! Business rules on top of the [`AddressBook`](crate::book::AddressBook).
//! The book and its records only enforce field formats; the rules a user
//! expects from the contact manager live here:
//!
//! - a new contact is created with a phone, and adding a phone the contact
//!   already has is a [`Duplicate`](crate::error::RolodexError::Duplicate);
//! - the last phone of a contact cannot be removed;
//! - every command naming a contact fails with `NotFound` when it is absent.
//!
//! Commands take the book plus plain arguments and return a [`CmdResult`].
//! They never print. Listing commands hand back a lazy
//! [`Paginator`](crate::paginate::Paginator) for the caller to walk.

use crate::model::{Phone, Record};
use crate::paginate::Paginator;

pub mod birthdays;
pub mod contacts;
pub mod helpers;
pub mod list;
pub mod notes;
pub mod phones;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created or modified, as they are after the command.
    pub affected_contacts: Vec<Record>,
    /// Pages to display, for listing commands.
    pub listing: Option<Paginator>,
    pub phones: Vec<Phone>,
    pub messages: Vec<CmdMessage>,
    /// Whether the book was mutated.
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_contact(mut self, record: Record) -> Self {
        self.affected_contacts.push(record);
        self
    }

    pub fn with_listing(mut self, listing: Paginator) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn mark_changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
