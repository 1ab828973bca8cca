//! UseCase: メッセージ送信と自動返信の予約
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - ユーザー発言の追加と、遅延返信の予約・配送
//!
//! ### なぜこのテストが必要か
//! - 送信は同期的にログへ追加され、返信は遅延後に 1 件だけ追加される
//! - 複数回送信した場合、返信は合流・キャンセルされずに予約順で届く
//! - 古いセッション宛の返信の扱いがポリシー通りになる
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信 → 1000ms 後に定型文の返信
//! - 異常系：空文字列・空白のみ・プレイヤー未選択（無視される）
//! - エッジケース：返信待ちの間にチャットを閉じる・開き直す

use std::sync::Arc;

use futures_util::FutureExt;
use squadup_shared::time::Clock;

use crate::domain::{
    IgnoreReason, Message, ReplyDelivery, ReplyPicker, SessionId, TaskHandle, TaskScheduler,
    Timestamp, pick_reply,
};

use super::context::ChatContext;

/// 送信結果
#[derive(Debug)]
pub enum SendOutcome {
    /// ユーザー発言を追加し、返信を予約した
    Sent { message: Message, reply: TaskHandle },
    /// 入力が無視された（ログは変化せず、返信も予約されない）
    Ignored(IgnoreReason),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    context: Arc<ChatContext>,
    /// TaskScheduler（タイマーの抽象化）
    scheduler: Arc<dyn TaskScheduler>,
    /// ReplyPicker（乱数の抽象化）
    picker: Arc<dyn ReplyPicker>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        context: Arc<ChatContext>,
        scheduler: Arc<dyn TaskScheduler>,
        picker: Arc<dyn ReplyPicker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            context,
            scheduler,
            picker,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// 1. ユーザー発言を同期的にログへ追加する
    /// 2. 遅延後に定型文の返信を追加するタスクを 1 つ予約する
    ///
    /// 以前に予約した返信はキャンセルも合流もしない。
    pub async fn execute(&self, text: &str) -> SendOutcome {
        let now = Timestamp::new(self.clock.now_millis());
        let submitted = self.context.session().await.submit_user_message(text, now);
        let (session_id, message) = match submitted {
            Ok(submitted) => submitted,
            Err(reason) => {
                tracing::debug!("Message ignored: {:?}", reason);
                return SendOutcome::Ignored(reason);
            }
        };

        let reply_text = pick_reply(self.picker.as_ref());
        let reply = self.scheduler.schedule(
            self.context.config().reply_delay,
            self.deliver_reply(session_id, reply_text),
        );
        self.context.track_reply(reply.cancel_token()).await;

        tracing::debug!(
            "Message {} sent in chat {}; reply scheduled",
            message.id,
            session_id
        );
        SendOutcome::Sent { message, reply }
    }

    fn deliver_reply(
        &self,
        session_id: SessionId,
        text: &'static str,
    ) -> futures_util::future::BoxFuture<'static, ()> {
        let context = self.context.clone();
        let clock = self.clock.clone();
        async move {
            let now = Timestamp::new(clock.now_millis());
            let policy = context.config().stale_reply_policy;
            let delivery = context
                .session()
                .await
                .deliver_reply(session_id, text, now, policy);
            match delivery {
                ReplyDelivery::Appended => {
                    tracing::debug!("Reply delivered to chat {}", session_id)
                }
                ReplyDelivery::DiscardedStale => {
                    tracing::warn!("Discarded reply addressed to stale chat {}", session_id)
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{CANNED_REPLIES, Sender, StaleReplyPolicy, TaskStatus, reply::MockReplyPicker},
        infrastructure::{
            reply::FixedReplyPicker, repository::InMemoryPlayerRepository,
            scheduler::TokioTaskScheduler,
        },
        usecase::{ChatConfig, CloseChatUseCase, OpenChatUseCase},
    };
    use squadup_shared::time::ManualClock;
    use std::time::Duration;

    struct Fixture {
        context: Arc<ChatContext>,
        clock: Arc<ManualClock>,
        open_chat: OpenChatUseCase,
        send_message: SendMessageUseCase,
    }

    fn create_fixture(policy: StaleReplyPolicy, picker: Arc<dyn ReplyPicker>) -> Fixture {
        let context = Arc::new(ChatContext::new(ChatConfig {
            stale_reply_policy: policy,
            ..ChatConfig::default()
        }));
        let clock = Arc::new(ManualClock::new(1_000));
        let open_chat = OpenChatUseCase::new(
            context.clone(),
            Arc::new(InMemoryPlayerRepository::seeded().unwrap()),
            clock.clone(),
        );
        let send_message = SendMessageUseCase::new(
            context.clone(),
            Arc::new(TokioTaskScheduler::new()),
            picker,
            clock.clone(),
        );
        Fixture {
            context,
            clock,
            open_chat,
            send_message,
        }
    }

    fn reply_handle(outcome: SendOutcome) -> TaskHandle {
        match outcome {
            SendOutcome::Sent { reply, .. } => reply,
            SendOutcome::Ignored(reason) => panic!("message was ignored: {reason:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_message_appends_and_schedules_reply() {
        // テスト項目: 送信するとユーザー発言が即座に追加され、遅延後に返信が 1 件追加される
        // given (前提条件):
        let mut picker = MockReplyPicker::new();
        picker.expect_pick().times(1).return_const(2usize);
        let fixture = create_fixture(StaleReplyPolicy::Discard, Arc::new(picker));
        fixture.open_chat.execute_by_id("1").await.unwrap();
        fixture.clock.advance(500);

        // when (操作):
        let outcome = fixture.send_message.execute("hello").await;

        // then (期待する結果): 送信直後
        let (message, reply) = match outcome {
            SendOutcome::Sent { message, reply } => (message, reply),
            SendOutcome::Ignored(reason) => panic!("unexpected: {reason:?}"),
        };
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.text, "hello");
        assert_eq!(message.timestamp, Timestamp::new(1_500));
        assert_eq!(fixture.context.snapshot().await.messages().len(), 2);
        assert_eq!(fixture.context.pending_reply_count().await, 1);

        // then (期待する結果): 遅延の直前まではまだ返信がない
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(fixture.context.snapshot().await.messages().len(), 2);

        // then (期待する結果): 遅延後
        fixture.clock.advance(1_000);
        assert_eq!(reply.wait().await, TaskStatus::Fired);
        let session = fixture.context.snapshot().await;
        assert_eq!(session.messages().len(), 3);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Player);
        assert_eq!(last.text, CANNED_REPLIES[2]);
        assert_eq!(last.timestamp, Timestamp::new(2_500));
        assert_eq!(fixture.context.pending_reply_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_messages_are_ignored() {
        // テスト項目: 空・空白のみのメッセージは無視され、返信も予約されない
        // given (前提条件):
        let mut picker = MockReplyPicker::new();
        picker.expect_pick().never();
        let fixture = create_fixture(StaleReplyPolicy::Discard, Arc::new(picker));
        fixture.open_chat.execute_by_id("1").await.unwrap();

        // when (操作):
        let empty = fixture.send_message.execute("").await;
        let blank = fixture.send_message.execute("   ").await;

        // then (期待する結果):
        assert!(matches!(empty, SendOutcome::Ignored(IgnoreReason::EmptyMessage)));
        assert!(matches!(blank, SendOutcome::Ignored(IgnoreReason::EmptyMessage)));
        assert_eq!(fixture.context.snapshot().await.messages().len(), 1);
        assert_eq!(fixture.context.pending_reply_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_without_player_is_ignored() {
        // テスト項目: プレイヤー未選択の状態での送信は無視される
        // given (前提条件):
        let fixture = create_fixture(StaleReplyPolicy::Discard, Arc::new(FixedReplyPicker::new(0)));

        // when (操作):
        let outcome = fixture.send_message.execute("hello").await;

        // then (期待する結果):
        assert!(matches!(
            outcome,
            SendOutcome::Ignored(IgnoreReason::NoPlayerSelected)
        ));
        assert!(fixture.context.snapshot().await.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiple_messages_get_independent_replies_in_order() {
        // テスト項目: 遅延中に複数回送信すると、それぞれに返信が予約順で届く
        // given (前提条件):
        let mut picker = MockReplyPicker::new();
        let mut indices = vec![0usize, 4, 1].into_iter();
        picker
            .expect_pick()
            .times(3)
            .returning(move |_| indices.next().unwrap_or(0));
        let fixture = create_fixture(StaleReplyPolicy::Discard, Arc::new(picker));
        fixture.open_chat.execute_by_id("5").await.unwrap();

        // when (操作):
        let mut handles = Vec::new();
        for text in ["one", "two", "three"] {
            handles.push(reply_handle(fixture.send_message.execute(text).await));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        for handle in handles {
            assert_eq!(handle.wait().await, TaskStatus::Fired);
        }

        // then (期待する結果):
        let texts: Vec<String> = fixture
            .context
            .snapshot()
            .await
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(
            texts,
            vec![
                "one",
                "two",
                "three",
                CANNED_REPLIES[0],
                CANNED_REPLIES[4],
                CANNED_REPLIES[1],
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_is_cancelled_when_chat_is_closed() {
        // テスト項目: Discard ポリシーでは返信待ちの間にチャットを閉じると返信は届かない
        // given (前提条件):
        let fixture = create_fixture(StaleReplyPolicy::Discard, Arc::new(FixedReplyPicker::new(0)));
        fixture.open_chat.execute_by_id("1").await.unwrap();
        let reply = reply_handle(fixture.send_message.execute("hello").await);

        // when (操作):
        CloseChatUseCase::new(fixture.context.clone())
            .execute()
            .await;
        let status = reply.wait().await;

        // then (期待する結果):
        assert_eq!(status, TaskStatus::Cancelled);
        assert_eq!(fixture.context.snapshot().await.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reply_appends_to_new_chat_with_append_policy() {
        // テスト項目: AppendToCurrent ポリシーでは開き直した後のログに古い返信が追加される
        // given (前提条件):
        let fixture = create_fixture(
            StaleReplyPolicy::AppendToCurrent,
            Arc::new(FixedReplyPicker::new(3)),
        );
        fixture.open_chat.execute_by_id("1").await.unwrap();
        let reply = reply_handle(fixture.send_message.execute("hello").await);

        // when (操作):
        fixture.open_chat.execute_by_id("2").await.unwrap();
        let status = reply.wait().await;

        // then (期待する結果):
        assert_eq!(status, TaskStatus::Fired);
        let session = fixture.context.snapshot().await;
        assert_eq!(session.messages().len(), 2);
        assert!(session.messages()[0].text.contains("ShadowHunter"));
        assert_eq!(session.messages()[1].text, CANNED_REPLIES[3]);
    }
}
