use crate::book::AddressBook;
use crate::commands::helpers::{contact, contact_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Entity, Result, RolodexError};

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    if old != new && record.has_phone(new) {
        return Err(RolodexError::Duplicate {
            name: name.to_string(),
            phone: new.to_string(),
        });
    }
    record.edit_phone(old, new)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} phone {} changed to {}",
            name, old, new
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = contact(book, name)?;
    let mut result = CmdResult::default().with_phones(record.phones().to_vec());
    if record.phones().is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Contact {} has no phones",
            name
        )));
    }
    Ok(result)
}

/// Removes every copy of `phone` from the contact. The last phone stays.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    if !record.has_phone(phone) {
        return Err(RolodexError::not_found(Entity::Phone, phone));
    }
    if record.phones().iter().all(|p| p == phone) {
        return Err(RolodexError::Api(format!(
            "Unable to delete the last phone of contact {}",
            name
        )));
    }
    record.remove_phone(phone);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone {} removed from contact {}",
            phone, name
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}
