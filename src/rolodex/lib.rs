//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact book library** with a small CLI client
//! on top. The library knows nothing about terminals; the binary knows nothing
//! about how contacts are validated or stored.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses startup flags and typed commands, prints output   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: loaded book, store, dirty flag         │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Contact-manager rules (duplicates, last phone, lookups)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model/, book.rs, paginate.rs)                        │
//! │  - Validated fields, Record, AddressBook, Paginator         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (JSON snapshot), InMemoryStore (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or exits the
//! process. Diagnostics go through the `log` facade; whoever embeds the
//! library decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business rules per command
//! - [`book`]: the in-memory contact store
//! - [`paginate`]: snapshot pagination
//! - [`model`]: validated fields and the contact record
//! - [`store`]: persistence trait and implementations
//! - [`config`]: settings and data directory resolution
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paginate;
pub mod store;
