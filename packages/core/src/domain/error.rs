//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクト生成時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Player ID must not be empty")]
    EmptyPlayerId,

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Age must be positive (got {0})")]
    NonPositiveAge(i64),

    #[error("Message must not be empty")]
    EmptyMessage,
}

/// ゲームキーの解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown game '{0}' (expected one of: dota, cs, valorant, pubg)")]
pub struct ParseGameError(pub String);

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Player '{0}' not found")]
    PlayerNotFound(String),

    #[error("Duplicate player ID '{0}' in roster")]
    DuplicatePlayerId(String),

    #[error("Malformed roster document: {0}")]
    MalformedRoster(String),

    #[error("Invalid player record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}
