//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::RepositoryError;

/// チャット開始時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenChatError {
    #[error("Invalid player ID: {0:?}")]
    InvalidPlayerId(String),

    #[error("Player '{0}' not found")]
    PlayerNotFound(String),

    #[error(transparent)]
    Repository(RepositoryError),
}
