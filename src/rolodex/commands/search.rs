use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

/// Contacts matching `term` by name (any case) or phone digits.
pub fn run(book: &AddressBook, term: &str, page_size: usize) -> Result<CmdResult> {
    if term.is_empty() {
        return Err(RolodexError::Api("Search term cannot be empty".to_string()));
    }

    let matches = book.search_records(term);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts found that match {}",
            term
        )));
    }
    Ok(result.with_listing(matches.paginate(page_size)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::fixtures::BookFixture;

    fn names(pages: impl Iterator<Item = Vec<Record>>) -> Vec<String> {
        pages
            .flatten()
            .map(|r| r.name().value().to_string())
            .collect()
    }

    #[test]
    fn finds_by_name_or_phone() {
        let book = BookFixture::new()
            .with_contact("Abcd", &["1112223333"])
            .with_contact("Xyz", &["0001112223"])
            .build();

        let result = run(&book, "abc", 10).unwrap();
        assert_eq!(names(result.listing.unwrap()), ["Abcd"]);

        let result = run(&book, "0001", 10).unwrap();
        assert_eq!(names(result.listing.unwrap()), ["Xyz"]);
    }

    #[test]
    fn no_match_reports_message() {
        let book = BookFixture::new().with_contacts(2).build();
        let result = run(&book, "zzz", 10).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_term_is_rejected() {
        assert!(run(&AddressBook::new(), "", 10).is_err());
    }
}
