//! Cache Shell Module
//!
//! A line-oriented front end over a single `Cache`, used by the binary.
//!
//! # Commands
//! - `help` - List commands
//! - `add <key> <value...>` - Store a value
//! - `get <key>` - Look a value up
//! - `stats` - Print cache counters as JSON
//! - `exit` - Leave the shell

mod commands;
mod input;

pub use commands::{Command, COMMANDS};
pub use input::clean_input;

/// Prompt printed before each input line.
pub const PROMPT: &str = "Pokecache > ";
