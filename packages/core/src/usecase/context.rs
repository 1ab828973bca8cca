//! チャットの共有状態
//!
//! 現在のセッションと、返信待ちタスクのキャンセルトークンを保持します。
//! グローバル変数は使わず、ユースケース間で `Arc<ChatContext>` を共有します。

use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{CancelToken, ConversationSession, StaleReplyPolicy};

/// 自動返信までの遅延
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// 模擬チャットの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    pub reply_delay: Duration,
    pub stale_reply_policy: StaleReplyPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            stale_reply_policy: StaleReplyPolicy::default(),
        }
    }
}

/// Shared chat state
#[derive(Debug, Default)]
pub struct ChatContext {
    session: Mutex<ConversationSession>,
    pending_replies: Mutex<Vec<CancelToken>>,
    config: ChatConfig,
}

impl ChatContext {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            session: Mutex::new(ConversationSession::new()),
            pending_replies: Mutex::new(Vec::new()),
            config,
        }
    }

    pub fn config(&self) -> ChatConfig {
        self.config
    }

    pub async fn session(&self) -> MutexGuard<'_, ConversationSession> {
        self.session.lock().await
    }

    pub async fn snapshot(&self) -> ConversationSession {
        self.session.lock().await.clone()
    }

    /// Number of scheduled replies that have neither fired nor been cancelled.
    pub async fn pending_reply_count(&self) -> usize {
        let mut pending = self.pending_replies.lock().await;
        pending.retain(CancelToken::is_pending);
        pending.len()
    }

    pub(crate) async fn track_reply(&self, token: CancelToken) {
        let mut pending = self.pending_replies.lock().await;
        pending.retain(CancelToken::is_pending);
        pending.push(token);
    }

    /// Cancel every pending reply when stale replies are discarded.
    ///
    /// Under `AppendToCurrent` nothing is cancelled. Returns the number of
    /// replies cancelled.
    pub(crate) async fn cancel_pending_replies(&self) -> usize {
        if self.config.stale_reply_policy != StaleReplyPolicy::Discard {
            return 0;
        }
        let mut pending = self.pending_replies.lock().await;
        let cancelled = pending.drain(..).filter(|token| token.cancel()).count();
        if cancelled > 0 {
            tracing::debug!("Cancelled {} pending replies", cancelled);
        }
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config() {
        // テスト項目: デフォルト設定は遅延 1000ms・古い返信は破棄
        // given (前提条件) / when (操作):
        let context = ChatContext::new(ChatConfig::default());

        // then (期待する結果):
        assert_eq!(context.config().reply_delay, Duration::from_millis(1000));
        assert_eq!(
            context.config().stale_reply_policy,
            StaleReplyPolicy::Discard
        );
        assert!(!context.snapshot().await.is_open());
    }

    #[tokio::test]
    async fn test_cancel_pending_replies_with_discard_policy() {
        // テスト項目: Discard ポリシーでは返信待ちが全てキャンセルされる
        // given (前提条件):
        let context = ChatContext::new(ChatConfig::default());
        let first = CancelToken::new();
        let second = CancelToken::new();
        context.track_reply(first.clone()).await;
        context.track_reply(second.clone()).await;

        // when (操作):
        let cancelled = context.cancel_pending_replies().await;

        // then (期待する結果):
        assert_eq!(cancelled, 2);
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
        assert_eq!(context.pending_reply_count().await, 0);
    }

    #[tokio::test]
    async fn test_cancel_pending_replies_with_append_policy() {
        // テスト項目: AppendToCurrent ポリシーでは返信待ちはキャンセルされない
        // given (前提条件):
        let context = ChatContext::new(ChatConfig {
            stale_reply_policy: StaleReplyPolicy::AppendToCurrent,
            ..ChatConfig::default()
        });
        let token = CancelToken::new();
        context.track_reply(token.clone()).await;

        // when (操作):
        let cancelled = context.cancel_pending_replies().await;

        // then (期待する結果):
        assert_eq!(cancelled, 0);
        assert!(token.is_pending());
        assert_eq!(context.pending_reply_count().await, 1);
    }

    #[tokio::test]
    async fn test_finished_replies_are_pruned() {
        // テスト項目: 実行済みの返信は返信待ちの件数に含まれない
        // given (前提条件):
        let context = ChatContext::new(ChatConfig::default());
        let fired = CancelToken::new();
        context.track_reply(fired.clone()).await;

        // when (操作):
        fired.try_fire();

        // then (期待する結果):
        assert_eq!(context.pending_reply_count().await, 0);
    }
}
