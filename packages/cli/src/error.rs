//! Error types for the terminal front-end.

use rustyline::error::ReadlineError;
use squadup_core::domain::RepositoryError;
use thiserror::Error;

/// Front-end errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Roster file could not be read
    #[error("Failed to read roster file '{path}': {source}")]
    RosterFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Roster could not be loaded
    #[error("Failed to load roster: {0}")]
    Roster(#[from] RepositoryError),

    /// Line editor could not be initialized
    #[error("Failed to initialize readline: {0}")]
    Readline(#[from] ReadlineError),
}

/// REPL command parse errors (shown to the user, never fatal)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Неизвестная команда: {0}. Введите /help")]
    UnknownCommand(String),

    #[error("Команде {0} нужен аргумент")]
    MissingArgument(&'static str),

    #[error("Неизвестная игра: {0} (dota, cs, valorant, pubg)")]
    UnknownGame(String),
}
