//! Validated scalar values.
//!
//! Every field is a newtype over the raw string the user typed. Construction
//! and every later `set` run the field's validation, so a value that exists is
//! a value that passed. Display and string conversion hand back the raw input
//! unchanged.
//!
//! | Field | Rule |
//! |-------|------|
//! | [`Name`] | non-empty |
//! | [`Phone`] | exactly ten ASCII digits |
//! | [`Birthday`] | an exact calendar date (`YYYY-MM-DD`, `YYYY/MM/DD`, `DD.MM.YYYY`) |
//! | [`NoteTag`] | anything, including the empty string |
//!
//! Fields deserialize through `TryFrom<String>`, so a snapshot holding an
//! invalid value is rejected instead of loaded.

use crate::error::{Result, RolodexError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

const BIRTHDAY_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
    NoteTag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "Name",
            FieldKind::Phone => "Phone",
            FieldKind::Birthday => "Birthday",
            FieldKind::NoteTag => "NoteTag",
        };
        f.write_str(label)
    }
}

/// A scalar value with a format rule.
pub trait Field {
    const KIND: FieldKind;

    fn is_valid(raw: &str) -> bool;

    fn validate(raw: &str) -> Result<()> {
        if Self::is_valid(raw) {
            Ok(())
        } else {
            Err(RolodexError::validation(Self::KIND, raw))
        }
    }
}

macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Result<Self> {
                let raw = raw.into();
                <Self as Field>::validate(&raw)?;
                Ok(Self(raw))
            }

            /// Replaces the value, keeping the old one if `raw` is invalid.
            pub fn set(&mut self, raw: impl Into<String>) -> Result<()> {
                let raw = raw.into();
                <Self as Field>::validate(&raw)?;
                self.0 = raw;
                Ok(())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = RolodexError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = RolodexError;

            fn try_from(raw: String) -> Result<Self> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(field: $name) -> String {
                field.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

string_field! {
    /// A contact's name. The identity key of a record.
    Name
}

string_field! {
    /// A ten digit phone number.
    Phone
}

string_field! {
    /// Free-text label attached to a note.
    NoteTag
}

impl Field for Name {
    const KIND: FieldKind = FieldKind::Name;

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
    }
}

impl Field for Phone {
    const KIND: FieldKind = FieldKind::Phone;

    fn is_valid(raw: &str) -> bool {
        PHONE_RE.is_match(raw)
    }
}

impl Field for NoteTag {
    const KIND: FieldKind = FieldKind::NoteTag;

    fn is_valid(_raw: &str) -> bool {
        true
    }
}

impl Default for NoteTag {
    fn default() -> Self {
        NoteTag(String::new())
    }
}

impl NoteTag {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A birth date, kept both as typed and parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    BIRTHDAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn is_valid(raw: &str) -> bool {
        parse_date(raw).is_some()
    }
}

impl Birthday {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let date = parse_date(&raw).ok_or_else(|| RolodexError::validation(Self::KIND, &raw))?;
        Ok(Self { raw, date })
    }

    /// Replaces the value, keeping the old one if `raw` is invalid.
    pub fn set(&mut self, raw: impl Into<String>) -> Result<()> {
        *self = Self::new(raw)?;
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Birthday {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = RolodexError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Birthday> for String {
    fn from(field: Birthday) -> String {
        field.raw
    }
}
