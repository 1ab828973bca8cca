//! UseCase: チャット終了

use std::sync::Arc;

use crate::domain::SessionId;

use super::context::ChatContext;

/// チャット終了のユースケース
pub struct CloseChatUseCase {
    context: Arc<ChatContext>,
}

impl CloseChatUseCase {
    pub fn new(context: Arc<ChatContext>) -> Self {
        Self { context }
    }

    /// チャットを閉じる。履歴と選択中のプレイヤーは保持される
    ///
    /// 閉じたセッションの ID を返す（既に閉じていれば `None`）。
    pub async fn execute(&self) -> Option<SessionId> {
        let closed = self.context.session().await.close_chat();
        if let Some(session_id) = closed {
            let cancelled = self.context.cancel_pending_replies().await;
            tracing::info!(
                "Closed chat {} ({} pending replies cancelled)",
                session_id,
                cancelled
            );
        }
        closed
    }
}
