use crate::book::AddressBook;
use crate::error::{Entity, Result, RolodexError};
use crate::model::Record;

pub fn contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| RolodexError::not_found(Entity::Contact, name))
}

pub fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| RolodexError::not_found(Entity::Contact, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn missing_contact_is_not_found() {
        let mut book = BookFixture::new().with_contact("Bob", &[]).build();
        assert!(contact(&book, "Bob").is_ok());
        assert!(matches!(
            contact_mut(&mut book, "bob"),
            Err(RolodexError::NotFound {
                entity: Entity::Contact,
                ..
            })
        ));
    }
}
