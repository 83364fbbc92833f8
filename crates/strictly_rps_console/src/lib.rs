//! Console front end for strictly_rps.
//!
//! Parses the command line, builds the selected game and runs the
//! interactive loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod setup;

// Crate-level exports - Command line
pub use cli::{Cli, Command, GameArgs};

// Crate-level exports - Console loop
pub use console::{Console, QUIT_WORDS};

// Crate-level exports - Setup
pub use setup::{MOVE_PREFIX, build_opponent, load_catalog};
