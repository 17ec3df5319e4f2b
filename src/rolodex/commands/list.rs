use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// The whole book, `page_size` contacts per page.
pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listing(book.paginate(page_size)))
}
