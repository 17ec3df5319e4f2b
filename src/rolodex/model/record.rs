use super::fields::{Birthday, Name, NoteTag, Phone};
use crate::error::{Entity, Result, RolodexError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One contact: a name, its phones, an optional birthday and tagged notes.
///
/// The name is the record's identity and never changes after construction.
/// Phones keep insertion order and may repeat; duplicate policy belongs to
/// the caller. Notes map note text to a tag, one tag per text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    notes: BTreeMap<String, NoteTag>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            birthday: None,
            phones: Vec::new(),
            notes: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    // --- Phones ---

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| *p == old)
            .ok_or_else(|| RolodexError::not_found(Entity::Phone, old))?;
        *slot = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == raw)
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.find_phone(raw).is_some()
    }

    /// Removes every phone equal to `raw`, returning how many went.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p != raw);
        before - self.phones.len()
    }

    // --- Birthday ---

    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday falling on `today` has already happened this year, so the
    /// result is always positive.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();

        let this_year = anniversary(born, today.year())?;
        let delta = (this_year - today).num_days();
        if delta > 0 {
            return Some(delta);
        }

        let next_year = anniversary(born, today.year() + 1)?;
        Some((next_year - today).num_days())
    }

    // --- Notes ---

    /// Adds a note unless the text is already present. The first tag wins.
    pub fn add_note(&mut self, text: impl Into<String>, tag: &str) -> Result<bool> {
        let tag = NoteTag::new(tag)?;
        let text = text.into();
        if self.notes.contains_key(&text) {
            return Ok(false);
        }
        self.notes.insert(text, tag);
        Ok(true)
    }

    /// Renames a note, carrying its tag over.
    pub fn edit_note(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        let new = new.into();
        let Some(tag) = self.notes.get(old).cloned() else {
            return Err(RolodexError::not_found(Entity::Note, old));
        };
        if new != old && self.notes.contains_key(&new) {
            return Err(RolodexError::Api(format!("Note already exists: {new}")));
        }
        self.notes.remove(old);
        self.notes.insert(new, tag);
        Ok(())
    }

    pub fn edit_tag(&mut self, text: &str, tag: &str) -> Result<()> {
        let tag = NoteTag::new(tag)?;
        let slot = self
            .notes
            .get_mut(text)
            .ok_or_else(|| RolodexError::not_found(Entity::Note, text))?;
        *slot = tag;
        Ok(())
    }

    pub fn delete_note(&mut self, text: &str) -> Result<NoteTag> {
        self.notes
            .remove(text)
            .ok_or_else(|| RolodexError::not_found(Entity::Note, text))
    }

    pub fn note_tag(&self, text: &str) -> Option<&NoteTag> {
        self.notes.get(text)
    }

    pub fn notes(&self) -> impl Iterator<Item = (&str, &NoteTag)> {
        self.notes.iter().map(|(text, tag)| (text.as_str(), tag))
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}

/// The birthday's month/day in `year`. Feb 29 falls back to Feb 28.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, ", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, "birthday: {}, ", birthday)?;
        }
        let phones: Vec<&str> = self.phones.iter().map(|p| p.value()).collect();
        write!(f, "phones: {}", phones.join("; "))?;
        for (text, tag) in &self.notes {
            if tag.is_empty() {
                write!(f, "\n  note: {}", text)?;
            } else {
                write!(f, "\n  note: {} [{}]", text, tag)?;
            }
        }
        Ok(())
    }
}
