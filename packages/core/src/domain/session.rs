//! Conversation simulator
//!
//! 1 人のプレイヤーとの模擬チャットの状態機械:
//!
//! ```text
//! Closed --open_chat--> Open --submit_user_message--> Open (返信待ち)
//!   ^                    |
//!   +----close_chat------+
//! ```
//!
//! 状態の更新は全てこの型のメソッドで行い、タイマーや乱数には依存しません。
//! 遅延返信の予約は UseCase 層の責務です。

use super::{
    entity::{Message, Player},
    value_object::{MessageText, SessionId, Timestamp},
};

/// チャットを開いた時にプレイヤー側から送られる挨拶
pub fn greeting_for(name: &str) -> String {
    format!("Привет! Я {name}, рад познакомиться!")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Closed,
    Open,
}

/// 送信が無視された理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoPlayerSelected,
    ChatClosed,
    EmptyMessage,
}

/// 遅延返信が届いた時点でセッションが変わっていた場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleReplyPolicy {
    /// 予約元のセッションが開いたままの場合のみ追記する。
    /// チャットを閉じる・開き直す時に返信待ちはキャンセルされる
    #[default]
    Discard,
    /// キャンセルせず、発火時点のメッセージログに無条件で追記する
    AppendToCurrent,
}

/// 遅延返信の配送結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDelivery {
    Appended,
    DiscardedStale,
}

/// 模擬チャットのセッション
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Option<SessionId>,
    selected_player: Option<Player>,
    state: ChatState,
    messages: Vec<Message>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            id: None,
            selected_player: None,
            state: ChatState::Closed,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<SessionId> {
        self.id
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.selected_player.as_ref()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ChatState::Open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Open a chat with `player`, replacing any previous conversation.
    ///
    /// The log is reset to the player's greeting and a fresh session ID is
    /// issued even when the same player is reopened.
    pub fn open_chat(&mut self, player: Player, now: Timestamp) -> SessionId {
        let id = SessionId::generate();
        self.messages = vec![Message::from_player(greeting_for(&player.name), now)];
        self.selected_player = Some(player);
        self.state = ChatState::Open;
        self.id = Some(id);
        id
    }

    /// Close the chat. The log and the selected player are kept.
    ///
    /// Returns the ID of the session that was open, if any.
    pub fn close_chat(&mut self) -> Option<SessionId> {
        if self.state == ChatState::Closed {
            return None;
        }
        self.state = ChatState::Closed;
        self.id
    }

    /// Append a user-authored message.
    ///
    /// On success returns the session the reply must be addressed to, along
    /// with the appended message.
    pub fn submit_user_message(
        &mut self,
        text: &str,
        now: Timestamp,
    ) -> Result<(SessionId, Message), IgnoreReason> {
        let id = match (&self.selected_player, self.id) {
            (Some(_), Some(id)) => id,
            _ => return Err(IgnoreReason::NoPlayerSelected),
        };
        if self.state == ChatState::Closed {
            return Err(IgnoreReason::ChatClosed);
        }
        let text = MessageText::new(text).map_err(|_| IgnoreReason::EmptyMessage)?;

        let message = Message::from_user(text, now);
        self.messages.push(message.clone());
        Ok((id, message))
    }

    /// Deliver a deferred reply that was scheduled for session `origin`.
    pub fn deliver_reply(
        &mut self,
        origin: SessionId,
        text: &str,
        now: Timestamp,
        policy: StaleReplyPolicy,
    ) -> ReplyDelivery {
        let deliverable = match policy {
            StaleReplyPolicy::Discard => self.is_open() && self.id == Some(origin),
            StaleReplyPolicy::AppendToCurrent => self.selected_player.is_some(),
        };
        if !deliverable {
            return ReplyDelivery::DiscardedStale;
        }

        self.messages.push(Message::from_player(text, now));
        ReplyDelivery::Appended
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
