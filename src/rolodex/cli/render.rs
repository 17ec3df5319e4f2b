//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text. Everything here returns a
//! `String`; the caller decides which stream it goes to. Colors come from
//! `colored`, which switches itself off when output is not a terminal or
//! `NO_COLOR` is set.

use colored::Colorize;
use rolodex::commands::{CmdMessage, CmdResult, MessageLevel};
use rolodex::error::RolodexError;
use rolodex::model::{Phone, Record};
use rolodex::paginate::Paginator;

pub const GREETING: &str = "How can I help you?";
pub const WELCOME: &str = "Welcome to rolodex! Type 'help' for the list of commands.";
pub const FAREWELL: &str = "Good bye!";
pub const PROMPT: &str = "> ";
pub const UNSAVED_HINT: &str = "Changes are kept in memory; run 'save' to try again.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

fn render_record(record: &Record) -> String {
    let text = record.to_string();
    // Bold the first line only; note lines stay plain.
    match text.split_once('\n') {
        Some((head, notes)) => format!("{}\n{}", head.bold(), notes),
        None => text.bold().to_string(),
    }
}

/// Walks every page, each under a `page N of M (T contacts)` header.
pub fn render_pages(pages: Paginator) -> String {
    let total = pages.page_count();
    let contacts = pages.total();
    let mut output = String::new();
    for (i, page) in pages.enumerate() {
        let header = format!("page {} of {} ({} contacts)", i + 1, total, contacts);
        output.push_str(&format!("{}\n", header.cyan()));
        for record in &page {
            output.push_str(&render_record(record));
            output.push('\n');
        }
    }
    output
}

pub fn render_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(|phone| format!("{}\n", phone))
        .collect()
}

pub fn render_result(result: CmdResult) -> String {
    let mut output = String::new();
    if let Some(pages) = result.listing {
        output.push_str(&render_pages(pages));
    }
    output.push_str(&render_phones(&result.phones));
    output.push_str(&render_messages(&result.messages));
    output
}

/// Errors render as `Error` messages. Storage failures add a hint, since the
/// session is still holding the unsaved book.
pub fn render_error(err: &RolodexError) -> String {
    let mut messages = vec![CmdMessage::error(format!("Error: {}", err))];
    if err.is_persistence() {
        messages.push(CmdMessage::warning(UNSAVED_HINT));
    }
    render_messages(&messages)
}
