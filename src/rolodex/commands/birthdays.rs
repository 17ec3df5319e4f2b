use crate::book::AddressBook;
use crate::commands::helpers::contact_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use chrono::NaiveDate;

pub fn set(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.add_birthday(date)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday of contact {} set to {}",
            name, date
        )))
        .with_affected_contact(record.clone())
        .mark_changed())
}

/// Contacts whose next birthday is exactly `days` after `today`.
pub fn upcoming(
    book: &AddressBook,
    days: i64,
    today: NaiveDate,
    page_size: usize,
) -> Result<CmdResult> {
    if days < 1 {
        return Err(RolodexError::Api(format!(
            "Days to birthday must be a positive number, got {}",
            days
        )));
    }

    let matches = book.filter_by_birthday_offset_from(days, today);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts have a birthday in {} days",
            days
        )));
    }
    Ok(result.with_listing(matches.paginate(page_size)))
}
