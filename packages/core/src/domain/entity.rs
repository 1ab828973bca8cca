//! エンティティ: プレイヤーとチャットメッセージ

use super::{
    game::Game,
    value_object::{Age, MessageId, MessageText, PlayerId, Timestamp},
};

/// チームメイト候補のプレイヤー
///
/// 名簿は固定のシードデータで、生成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: Age,
    pub game: Game,
    /// ゲームごとのランク名（`Game::ranks` のいずれかであることは強制しない）
    pub rank: String,
    pub rating: i32,
    pub description: String,
    pub avatar: Option<String>,
    pub languages: Vec<String>,
    pub play_style: String,
    pub availability: String,
}

impl Player {
    /// Avatar fallback: the first two characters of the name, upper-cased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).flat_map(char::to_uppercase).collect()
    }
}

/// メッセージの送信者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Player,
}

/// チャットメッセージ（追記のみで、変更・削除されない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
}

impl Message {
    pub fn from_user(text: MessageText, timestamp: Timestamp) -> Self {
        Self {
            id: MessageId::generate(),
            text: text.into_string(),
            sender: Sender::User,
            timestamp,
        }
    }

    pub fn from_player(text: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: MessageId::generate(),
            text: text.into(),
            sender: Sender::Player,
            timestamp,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_player(id: &str, name: &str, game: Game, rank: &str, rating: i32) -> Player {
    Player {
        id: PlayerId::new(id.to_string()).unwrap(),
        name: name.to_string(),
        age: Age::new(20).unwrap(),
        game,
        rank: rank.to_string(),
        rating,
        description: String::new(),
        avatar: None,
        languages: vec!["RU".to_string()],
        play_style: "Support".to_string(),
        availability: "Вечером".to_string(),
    }
}
