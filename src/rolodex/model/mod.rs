//! Core data types: validated [`fields`] and the contact [`Record`].

pub mod fields;
pub mod record;

pub use fields::{Birthday, Field, FieldKind, Name, NoteTag, Phone};
pub use record::Record;
