//! REPL command parsing.
//!
//! Commands may be written with or without a leading `/`. While a chat is
//! open, a line without the `/` prefix is sent to the player as a message.

use squadup_core::domain::Game;

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Games,
    SelectGame(Game),
    Search(String),
    MinRating(String),
    Rank(String),
    Ranks,
    Reset,
    List,
    Stats,
    OpenChat(String),
    Say(String),
    Close,
    History,
    Quit,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line outside a chat.
pub fn parse_line(line: &str, chat_open: bool) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    let (explicit, body) = match trimmed.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if chat_open && !explicit {
        // blank messages are passed through and ignored by the chat itself
        return Ok(Some(Command::Say(line.to_string())));
    }
    if body.is_empty() {
        return Ok(None);
    }

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "games" => Command::Games,
        "game" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("game"));
            }
            let game = arg
                .parse::<Game>()
                .map_err(|_| CommandError::UnknownGame(arg.to_string()))?;
            Command::SelectGame(game)
        }
        "search" => Command::Search(arg.to_string()),
        "min-rating" | "rating" => Command::MinRating(arg.to_string()),
        "rank" => Command::Rank(arg.to_string()),
        "ranks" => Command::Ranks,
        "reset" => Command::Reset,
        "list" | "ls" => Command::List,
        "stats" => Command::Stats,
        "chat" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("chat"));
            }
            Command::OpenChat(arg.to_string())
        }
        "say" => Command::Say(arg.to_string()),
        "close" => Command::Close,
        "history" => Command::History,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}
