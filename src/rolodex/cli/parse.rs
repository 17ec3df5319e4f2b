//! Text commands, as typed at the prompt or passed on the command line.
//!
//! A line is split on whitespace; double quotes group words into one
//! argument (`set_note Bob "call back" work`) and `""` is an empty argument.
//! The command word is case-insensitive, arguments are taken verbatim.

use rolodex::error::{Result, RolodexError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    SetBirthday { name: String, date: String },
    DaysToBirthday { days: i64 },
    SetNote { name: String, text: String, tag: String },
    UpdateNote { name: String, old: String, new: String },
    DeleteNote { name: String, text: String },
    UpdateTag { name: String, text: String, tag: String },
    Delete { name: String, phone: Option<String> },
    ShowAll,
    Search { term: String },
    Save,
    Exit,
}

const USAGE: &[(&str, &str)] = &[
    ("hello", "hello"),
    ("help", "help"),
    ("add", "add <name> <phone>"),
    ("change", "change <name> <old phone> <new phone>"),
    ("phone", "phone <name>"),
    ("set_birthday", "set_birthday <name> <date>"),
    ("days_to_birthday", "days_to_birthday <days>"),
    ("set_note", "set_note <name> <text> [tag]"),
    ("update_note", "update_note <name> <old text> <new text>"),
    ("delete_note", "delete_note <name> <text>"),
    ("update_tag", "update_tag <name> <text> <tag>"),
    ("delete", "delete <name> [phone]"),
    ("show", "show all"),
    ("search", "search <text>"),
    ("save", "save"),
    ("exit", "exit | close | good bye"),
    ("close", "exit | close | good bye"),
    ("good", "exit | close | good bye"),
];

fn usage_error(word: &str) -> RolodexError {
    match USAGE.iter().find(|(cmd, _)| *cmd == word) {
        Some((_, usage)) => RolodexError::Api(format!("Usage: {}", usage)),
        None => RolodexError::Api(format!(
            "Unknown command '{}'. Type 'help' for the list of commands",
            word
        )),
    }
}

/// Splits a line into arguments, honouring double quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(RolodexError::Api("Unclosed quote".to_string()));
    }
    if pending {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    parse_tokens(&tokens).map(Some)
}

/// Parses pre-split arguments, e.g. from the process command line.
pub fn parse_tokens<T: AsRef<str>>(tokens: &[T]) -> Result<Command> {
    let args: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    let Some((head, rest)) = args.split_first() else {
        return Err(RolodexError::Api("No command given".to_string()));
    };
    let word = head.to_lowercase();

    let command = match (word.as_str(), rest) {
        ("hello", []) => Command::Hello,
        ("help", []) => Command::Help,
        ("add", [name, phone]) => Command::Add {
            name: name.clone(),
            phone: phone.clone(),
        },
        ("change", [name, old, new]) => Command::Change {
            name: name.clone(),
            old: old.clone(),
            new: new.clone(),
        },
        ("phone", [name]) => Command::Phone { name: name.clone() },
        ("set_birthday", [name, date]) => Command::SetBirthday {
            name: name.clone(),
            date: date.clone(),
        },
        ("days_to_birthday", [days]) => {
            let days = days.parse().map_err(|_| {
                RolodexError::Api(format!("Days must be a whole number, got '{}'", days))
            })?;
            Command::DaysToBirthday { days }
        }
        ("set_note", [name, text]) => Command::SetNote {
            name: name.clone(),
            text: text.clone(),
            tag: String::new(),
        },
        ("set_note", [name, text, tag]) => Command::SetNote {
            name: name.clone(),
            text: text.clone(),
            tag: tag.clone(),
        },
        ("update_note", [name, old, new]) => Command::UpdateNote {
            name: name.clone(),
            old: old.clone(),
            new: new.clone(),
        },
        ("delete_note", [name, text]) => Command::DeleteNote {
            name: name.clone(),
            text: text.clone(),
        },
        ("update_tag", [name, text, tag]) => Command::UpdateTag {
            name: name.clone(),
            text: text.clone(),
            tag: tag.clone(),
        },
        ("delete", [name]) => Command::Delete {
            name: name.clone(),
            phone: None,
        },
        ("delete", [name, phone]) => Command::Delete {
            name: name.clone(),
            phone: Some(phone.clone()),
        },
        ("show", [all]) if all.eq_ignore_ascii_case("all") => Command::ShowAll,
        ("search", terms) if !terms.is_empty() => Command::Search {
            term: terms.join(" "),
        },
        ("save", []) => Command::Save,
        ("exit" | "close", []) => Command::Exit,
        ("good", [bye]) if bye.eq_ignore_ascii_case("bye") => Command::Exit,
        (other, _) => return Err(usage_error(other)),
    };
    Ok(command)
}

/// Help text listing every command.
pub fn help_text() -> String {
    let mut lines = vec!["Commands:".to_string()];
    let mut seen = Vec::new();
    for (_, usage) in USAGE {
        if !seen.contains(usage) {
            seen.push(*usage);
            lines.push(format!("  {}", usage));
        }
    }
    lines.join("\n")
}
