use crate::book::AddressBook;
use crate::commands::helpers::contact_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Attaches a note to a contact. An existing note with the same text is kept as is.
pub fn set(book: &mut AddressBook, name: &str, text: &str, tag: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    if !record.add_note(text, tag)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact {} already has note \"{}\"",
            name, text
        ))));
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note \"{}\" added to contact {}",
            text, name
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}

pub fn update(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.edit_note(old, new)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note \"{}\" of contact {} changed to \"{}\"",
            old, name, new
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}

pub fn delete(book: &mut AddressBook, name: &str, text: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.delete_note(text)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note \"{}\" removed from contact {}",
            text, name
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}

pub fn update_tag(book: &mut AddressBook, name: &str, text: &str, tag: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.edit_tag(text, tag)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note \"{}\" of contact {} tagged \"{}\"",
            text, name, tag
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}
