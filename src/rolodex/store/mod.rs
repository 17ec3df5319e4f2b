//! # Storage Layer
//!
//! The address book lives in memory for the whole session and is persisted
//! wholesale. [`BookStore`] is the seam between the two: `load` at startup,
//! `save` at shutdown or on an explicit `save` command.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON snapshot file at a path
//!   chosen by configuration.
//! - [`memory::InMemoryStore`]: keeps the serialized snapshot in memory, for
//!   testing the layers above without touching the filesystem.
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Bob", "birthday": "1990-03-15",
//!       "phones": ["0123456789"], "notes": { "call back": "work" } }
//!   ]
//! }
//! ```
//!
//! A snapshot that fails to parse, carries an invalid field, repeats a name or
//! has an unknown version is an error. Nothing is ever half-loaded.

use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Load/save contract for the address book.
pub trait BookStore {
    /// Read the persisted book. A store with no snapshot yet yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the whole book, replacing the previous snapshot.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    contacts: AddressBook,
}

fn snapshot_of(book: &AddressBook) -> SnapshotRef<'_> {
    SnapshotRef {
        version: SNAPSHOT_VERSION,
        contacts: book,
    }
}

fn check_version(snapshot: Snapshot) -> Result<AddressBook> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(RolodexError::Store(format!(
            "Unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }
    Ok(snapshot.contacts)
}
