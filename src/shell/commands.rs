//! Shell command parsing and execution.

use crate::cache::Cache;
use crate::error::{CacheError, Result};

/// Usage line and description for every shell command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("add <key> <value>", "Stores a value under a key"),
    ("get <key>", "Prints the value stored under a key"),
    ("stats", "Prints cache counters as JSON"),
    ("exit", "Exits the shell"),
];

// == Command ==
/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { key: String, value: String },
    Get { key: String },
    Stats,
    Exit,
}

impl Command {
    // == Parse ==
    /// Builds a command from cleaned input words.
    ///
    /// Returns `Ok(None)` for a blank line. Words after the key of an `add`
    /// are joined with single spaces to form the value.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "stats" => Command::Stats,
            "exit" => Command::Exit,
            "get" => match args {
                [key, ..] => Command::Get { key: key.clone() },
                [] => return Err(CacheError::Usage("get <key>".to_string())),
            },
            "add" => match args {
                [key, value @ ..] if !value.is_empty() => Command::Add {
                    key: key.clone(),
                    value: value.join(" "),
                },
                _ => return Err(CacheError::Usage("add <key> <value>".to_string())),
            },
            other => return Err(CacheError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    // == Execute ==
    /// Runs the command against `cache` and returns the text to print.
    pub fn execute(&self, cache: &Cache) -> String {
        match self {
            Command::Help => help_text(),
            Command::Add { key, value } => {
                cache.add(key.as_str(), value.as_bytes());
                format!("Stored {}", key)
            }
            Command::Get { key } => match cache.get(key) {
                Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                None => "(miss)".to_string(),
            },
            Command::Stats => serde_json::to_string_pretty(&cache.stats())
                .unwrap_or_else(|err| format!("Failed to encode stats: {}", err)),
            Command::Exit => "Closing the cache shell... Goodbye!".to_string(),
        }
    }
}

fn help_text() -> String {
    let mut text = String::from("\nWelcome to the Pokecache shell!\nUsage:\n\n");
    for (usage, description) in COMMANDS {
        text.push_str(&format!("{}: {}\n", usage, description));
    }
    text
}
