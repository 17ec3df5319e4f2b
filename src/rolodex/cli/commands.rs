//! # CLI Layer
//!
//! One possible UI client for rolodex. This is the only place that reads
//! stdin, writes to stdout/stderr or decides the exit code.
//!
//! Two modes share the same command set:
//!
//! - **One-shot**: `rolodex add Bob 0123456789` runs one command, saves if it
//!   changed anything and exits non-zero on error.
//! - **Interactive**: plain `rolodex` reads commands line by line until
//!   `exit`, `close`, `good bye` or end of input, then saves once. A failed
//!   command is reported and the session goes on.
//!
//! ## Structure
//!
//! - `run()`: entry point called by `main.rs`
//! - `dispatch()`: maps a parsed [`Command`] to a `RolodexApi` call
//! - `interactive()`: the read-eval-print loop, over any reader and writers

use super::parse::{self, Command};
use super::render::{self, FAREWELL, GREETING, PROMPT, WELCOME};
use super::setup::{init_api, init_logging, Cli};
use clap::Parser;
use log::{debug, warn};
use rolodex::api::RolodexApi;
use rolodex::commands::{CmdMessage, CmdResult};
use rolodex::error::Result;
use rolodex::store::BookStore;
use std::io::{self, BufRead, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);
    let mut api = init_api(&cli)?;

    if cli.command.is_empty() {
        let stdin = io::stdin();
        interactive(&mut api, stdin.lock(), &mut io::stdout(), &mut io::stderr())
    } else {
        one_shot(&mut api, &cli.command, &mut io::stdout())
    }
}

/// Runs a single command given as separate arguments.
pub fn one_shot<S: BookStore, W: Write>(
    api: &mut RolodexApi<S>,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let command = parse::parse_tokens(args)?;
    if command == Command::Exit {
        return Ok(());
    }
    let result = dispatch(api, command)?;
    write!(out, "{}", render::render_result(result))?;
    api.save_if_dirty()?;
    Ok(())
}

enum Step {
    Skip,
    Exit,
    Output(CmdResult),
}

/// Reads commands from `input` until an exit command or end of input.
///
/// Results go to `out`, failures to `err`. The book is saved once on the
/// way out if anything changed.
pub fn interactive<S: BookStore, R: BufRead, W: Write, E: Write>(
    api: &mut RolodexApi<S>,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    writeln!(out, "{}", WELCOME)?;
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(out)?;
            break;
        }

        let step = parse::parse(&line).and_then(|command| match command {
            None => Ok(Step::Skip),
            Some(Command::Exit) => Ok(Step::Exit),
            Some(command) => dispatch(api, command).map(Step::Output),
        });
        match step {
            Ok(Step::Skip) => continue,
            Ok(Step::Exit) => break,
            Ok(Step::Output(result)) => write!(out, "{}", render::render_result(result))?,
            Err(e) => {
                warn!("command failed: {}", e);
                write!(err, "{}", render::render_error(&e))?;
            }
        }
    }

    api.save_if_dirty()?;
    writeln!(out, "{}", FAREWELL)?;
    Ok(())
}

/// Calls the API for one command. `Exit` is handled by the caller.
pub fn dispatch<S: BookStore>(api: &mut RolodexApi<S>, command: Command) -> Result<CmdResult> {
    match command {
        Command::Hello => Ok(CmdResult::default().with_message(CmdMessage::info(GREETING))),
        Command::Help => {
            Ok(CmdResult::default().with_message(CmdMessage::info(parse::help_text())))
        }
        Command::Add { name, phone } => api.add_contact(&name, &phone),
        Command::Change { name, old, new } => api.change_phone(&name, &old, &new),
        Command::Phone { name } => api.phones(&name),
        Command::SetBirthday { name, date } => api.set_birthday(&name, &date),
        Command::DaysToBirthday { days } => api.birthdays_in(days),
        Command::SetNote { name, text, tag } => api.set_note(&name, &text, &tag),
        Command::UpdateNote { name, old, new } => api.update_note(&name, &old, &new),
        Command::DeleteNote { name, text } => api.delete_note(&name, &text),
        Command::UpdateTag { name, text, tag } => api.update_tag(&name, &text, &tag),
        Command::Delete { name, phone: None } => api.delete_contact(&name),
        Command::Delete {
            name,
            phone: Some(phone),
        } => api.remove_phone(&name, &phone),
        Command::ShowAll => api.list(),
        Command::Search { term } => api.search(&term),
        Command::Save => api.save(),
        Command::Exit => Ok(CmdResult::default()),
    }
}
