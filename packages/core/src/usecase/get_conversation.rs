//! UseCase: 現在の会話の取得

use std::sync::Arc;

use crate::domain::ConversationSession;

use super::context::ChatContext;

/// 表示用に現在のセッションのスナップショットを返す
pub struct GetConversationUseCase {
    context: Arc<ChatContext>,
}

impl GetConversationUseCase {
    pub fn new(context: Arc<ChatContext>) -> Self {
        Self { context }
    }

    pub async fn execute(&self) -> ConversationSession {
        self.context.snapshot().await
    }
}
