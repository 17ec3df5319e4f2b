//! Entry point for the `rolodex` binary.
//!
//! Testing is split by layer, the same way the library is:
//!
//! - **Core and commands (`rolodex::model`, `rolodex::book`, `rolodex::commands`)**:
//!   unit tests against in-memory books, no I/O.
//! - **API (`rolodex::api`)**: sessions over `InMemoryStore`, checking the dirty
//!   flag and what reaches the store.
//! - **CLI (`src/rolodex/cli/`)**: parsing of typed commands, rendering of canned
//!   `CmdResult`s, and whole interactive sessions fed from a byte buffer.
//! - **End to end (`tests/`)**: the built binary against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
