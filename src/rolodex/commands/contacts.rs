use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Entity, Result, RolodexError};
use crate::model::Record;

/// Creates a contact with one phone, or adds the phone to an existing contact.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        if record.has_phone(phone) {
            return Err(RolodexError::Duplicate {
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }
        record.add_phone(phone)?;
        return Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Added phone {} to contact {}",
                phone, name
            )))
            .with_affected_contact(record.clone())
            .mark_changed());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record.clone());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} added with phone {}",
            name, phone
        )))
        .with_affected_contact(record)
        .mark_changed())
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| RolodexError::not_found(Entity::Contact, name))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact {} deleted", name)))
        .with_affected_contact(removed)
        .mark_changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn creates_new_contact_with_phone() {
        let mut book = AddressBook::new();
        let result = add(&mut book, "Bob", "0123456789").unwrap();

        assert!(result.changed);
        assert_eq!(result.affected_contacts.len(), 1);
        let bob = book.find("Bob").unwrap();
        assert_eq!(bob.phones().len(), 1);
        assert_eq!(bob.phones()[0].value(), "0123456789");
    }

    #[test]
    fn adds_another_phone_to_existing_contact() {
        let mut book = BookFixture::new()
            .with_contact("Bob", &["0123456789"])
            .with_note("Bob", "keep me", "")
            .build();

        add(&mut book, "Bob", "1112223333").unwrap();

        let bob = book.find("Bob").unwrap();
        assert_eq!(bob.phones().len(), 2);
        assert!(bob.note_tag("keep me").is_some());
    }

    #[test]
    fn rejects_duplicate_phone() {
        let mut book = BookFixture::new()
            .with_contact("Bob", &["0123456789"])
            .build();

        let err = add(&mut book, "Bob", "0123456789").unwrap_err();
        assert!(matches!(err, RolodexError::Duplicate { .. }));
        assert_eq!(book.find("Bob").unwrap().phones().len(), 1);
    }

    #[test]
    fn invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "Bob", "12345").unwrap_err();
        assert!(matches!(
            err,
            RolodexError::Validation {
                kind: FieldKind::Phone,
                ..
            }
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn delete_removes_contact() {
        let mut book = BookFixture::new().with_contacts(2).build();
        let result = delete(&mut book, "Contact 1").unwrap();

        assert!(result.changed);
        assert_eq!(book.names().collect::<Vec<_>>(), ["Contact 2"]);
    }

    #[test]
    fn delete_unknown_contact_is_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            delete(&mut book, "Ghost"),
            Err(RolodexError::NotFound {
                entity: Entity::Contact,
                ..
            })
        ));
    }
}
