//! Domain layer
//!
//! プレイヤー名簿のフィルタと、模擬チャットの状態遷移を表すドメインモデル。
//! 副作用（タイマー、乱数、時計）は trait 越しに注入されます。

pub mod entity;
pub mod error;
pub mod filter;
pub mod game;
pub mod reply;
pub mod repository;
pub mod scheduler;
pub mod session;
pub mod summary;
pub mod value_object;

pub use entity::{Message, Player, Sender};
pub use error::{ParseGameError, RepositoryError, ValueObjectError};
pub use filter::{FilterCriteria, FilterEvent, filter_players, parse_min_rating};
pub use game::{AccentColor, Game, GameProfile, ranks_for_key};
pub use reply::{CANNED_REPLIES, ReplyPicker, pick_reply};
pub use repository::PlayerRepository;
pub use scheduler::{CancelToken, TaskHandle, TaskScheduler, TaskStatus};
pub use session::{
    ChatState, ConversationSession, IgnoreReason, ReplyDelivery, StaleReplyPolicy, greeting_for,
};
pub use summary::{GameSummary, RosterSummary};
pub use value_object::{Age, MessageId, MessageText, PlayerId, SessionId, Timestamp};
