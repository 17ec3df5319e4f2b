//! # CLI Behavior
//!
//! This is **one possible UI client** for rolodex, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `rolodex`.
//!
//! ## Naked Execution (`rolodex`)
//!
//! Running `rolodex` with no command starts an interactive session. Commands are
//! typed one per line; `exit`, `close`, `good bye` or end of input ends it, and
//! the book is written back once if anything changed.
//!
//! ## One-Shot Execution (`rolodex <command> ...`)
//!
//! Trailing arguments are one command in the same form as at the prompt, so
//! `rolodex show all` and typing `show all` in a session do the same thing.
//! The shell already did the quoting, so no further splitting happens.
//!
//! ## Module Structure
//!
//! - `commands`: run loop, one-shot mode and API dispatch
//! - `parse`: tokenizer and text command grammar
//! - `render`: output formatting (pages, colors, messages)
//! - `setup`: startup flags via clap, logging, session bootstrap

mod commands;
mod parse;
mod render;
mod setup;

pub use commands::run;
