//! Text formatting for the terminal views.

use squadup_core::domain::{
    AccentColor, ConversationSession, FilterCriteria, Game, Message, Player, RosterSummary, Sender,
};
use squadup_shared::time::timestamp_to_clock_time;

const SEPARATOR: &str = "============================================================";

/// View formatter for terminal display
#[derive(Debug, Clone, Copy)]
pub struct ViewFormatter {
    colored: bool,
}

impl ViewFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, accent: AccentColor) -> String {
        if !self.colored {
            return text.to_string();
        }
        let code = match accent {
            AccentColor::Red => 31,
            AccentColor::Blue => 34,
            AccentColor::Pink => 35,
            AccentColor::Orange => 33,
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }

    /// Format the game tabs, marking the selected one
    pub fn format_games(&self, selected: Game) -> String {
        let mut output = String::new();
        for game in Game::ALL {
            let marker = if game == selected { "*" } else { " " };
            output.push_str(&format!(
                "{} {:<9} {}\n",
                marker,
                game.as_key(),
                self.paint(game.display_name(), game.accent())
            ));
        }
        output
    }

    /// Format the active filter as a single header line
    pub fn format_criteria(&self, criteria: &FilterCriteria) -> String {
        let game = criteria.selected_game;
        let mut parts = vec![self.paint(game.display_name(), game.accent())];
        if !criteria.search_term.is_empty() {
            parts.push(format!("поиск: \"{}\"", criteria.search_term));
        }
        if let Some(min) = criteria.min_rating {
            parts.push(format!("рейтинг от {min}"));
        }
        if let Some(rank) = &criteria.selected_rank {
            parts.push(format!("ранг: {rank}"));
        }
        parts.join(" | ")
    }

    /// Format one player card
    pub fn format_player(&self, player: &Player) -> String {
        let accent = player.game.accent();
        let mut output = String::new();
        output.push_str(&format!(
            "[{}] {} (id: {}), {} лет\n",
            self.paint(&player.initials(), accent),
            player.name,
            player.id,
            player.age.value()
        ));
        output.push_str(&format!(
            "    Ранг: {}  Рейтинг: {}\n",
            player.rank, player.rating
        ));
        output.push_str(&format!(
            "    Стиль: {}  Языки: {}  Время: {}\n",
            player.play_style,
            player.languages.join(", "),
            player.availability
        ));
        output.push_str(&format!("    {}\n", player.description));
        output
    }

    /// Format the filtered roster, or the empty state when nothing matched
    pub fn format_roster(&self, criteria: &FilterCriteria, players: &[Player]) -> String {
        let mut output = String::new();
        output.push_str(SEPARATOR);
        output.push('\n');
        output.push_str(&self.format_criteria(criteria));
        output.push('\n');
        output.push_str(SEPARATOR);
        output.push('\n');

        if players.is_empty() {
            output.push_str("Игроки не найдены\n");
            output.push_str("Попробуйте изменить критерии поиска\n");
            return output;
        }
        for player in players {
            output.push_str(&self.format_player(player));
        }
        output
    }

    pub fn format_ranks(&self, game: Game, ranks: &[&str]) -> String {
        format!(
            "{}: {}\n",
            self.paint(game.display_name(), game.accent()),
            ranks.join(", ")
        )
    }

    pub fn format_summary(&self, summary: &RosterSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Всего игроков: {}, средний рейтинг: {}\n",
            summary.total_players,
            format_optional(summary.average_rating)
        ));
        for game in &summary.games {
            output.push_str(&format!(
                "  {:<15} игроков: {:<3} средний: {:<6} лучший: {}\n",
                game.game.display_name(),
                game.players,
                format_optional(game.average_rating),
                format_optional(game.top_rating)
            ));
        }
        output
    }

    /// Format a chat message
    pub fn format_message(&self, message: &Message, player_name: &str) -> String {
        let author = match message.sender {
            Sender::User => "Вы",
            Sender::Player => player_name,
        };
        format!(
            "[{}] {}: {}\n",
            timestamp_to_clock_time(message.timestamp.value()),
            author,
            message.text
        )
    }

    /// Format the chat header shown when a conversation opens
    pub fn format_chat_opened(&self, player: &Player) -> String {
        format!(
            "\n--- Чат с {} ({}). /close чтобы выйти ---\n",
            self.paint(&player.name, player.game.accent()),
            player.game.display_name()
        )
    }

    pub fn format_chat_closed(&self) -> String {
        "--- Чат закрыт ---\n".to_string()
    }

    /// Format the full message log of the current session
    pub fn format_history(&self, session: &ConversationSession) -> String {
        match session.selected_player() {
            Some(player) if session.is_open() => {
                let mut output = String::new();
                for message in session.messages() {
                    output.push_str(&self.format_message(message, &player.name));
                }
                output
            }
            _ => "Чат не открыт\n".to_string(),
        }
    }

    pub fn format_help(&self) -> String {
        [
            "Команды:",
            "  /games              список игр",
            "  /game <игра>        выбрать игру (dota, cs, valorant, pubg)",
            "  /search [текст]     поиск по имени и описанию",
            "  /min-rating [число] минимальный рейтинг",
            "  /rank [ранг]        фильтр по рангу",
            "  /ranks              ранги выбранной игры",
            "  /reset              сбросить фильтры",
            "  /list               показать игроков",
            "  /stats              статистика по играм",
            "  /chat <id>          открыть чат с игроком",
            "  /say <текст>        отправить сообщение",
            "  /history            история чата",
            "  /close              закрыть чат",
            "  /quit               выход",
            "В открытом чате строка без / отправляется как сообщение.",
        ]
        .join("\n")
            + "\n"
    }
}

fn format_optional(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
