//! UseCase layer
//!
//! ドメインモデルを組み合わせ、プレゼンテーション層から呼ばれる操作を提供します。
//! 各ユースケースは `execute` を 1 つ持ちます。

mod close_chat;
mod context;
mod error;
mod filter_players;
mod get_conversation;
mod open_chat;
mod roster_summary;
mod send_message;

pub use close_chat::CloseChatUseCase;
pub use context::{ChatConfig, ChatContext, DEFAULT_REPLY_DELAY};
pub use error::OpenChatError;
pub use filter_players::FilterPlayersUseCase;
pub use get_conversation::GetConversationUseCase;
pub use open_chat::OpenChatUseCase;
pub use roster_summary::GetRosterSummaryUseCase;
pub use send_message::{SendMessageUseCase, SendOutcome};
