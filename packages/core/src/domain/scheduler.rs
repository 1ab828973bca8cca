//! Timer facility
//!
//! 「一定時間後にこのタスクを実行する」という抽象。実装は Infrastructure 層が提供し、
//! 予約したタスクは `TaskHandle` を通じてキャンセル・完了待ちができます。

use std::{
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
    time::Duration,
};

use futures_util::future::BoxFuture;
use tokio::sync::oneshot;

const PENDING: u8 = 0;
const CANCELLED: u8 = 1;
const FIRED: u8 = 2;

/// 予約タスクの最終結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Fired,
    Cancelled,
}

/// 予約タスクのキャンセル用トークン（複製しても同じタスクを指す）
///
/// A task moves out of the pending state exactly once: either `cancel`
/// or `try_fire` wins.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    state: Arc<AtomicU8>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&self) -> bool {
        self.transition(CANCELLED)
    }

    /// Claim the task for execution. Returns `false` if it was cancelled.
    pub fn try_fire(&self) -> bool {
        self.transition(FIRED)
    }

    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::SeqCst) == PENDING
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::SeqCst) == CANCELLED
    }

    fn transition(&self, to: u8) -> bool {
        self.state
            .compare_exchange(PENDING, to, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// 予約タスクのハンドル
#[derive(Debug)]
pub struct TaskHandle {
    token: CancelToken,
    done: oneshot::Receiver<TaskStatus>,
}

impl TaskHandle {
    pub fn new(token: CancelToken, done: oneshot::Receiver<TaskStatus>) -> Self {
        Self { token, done }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) -> bool {
        self.token.cancel()
    }

    /// Wait until the scheduler has either run or skipped the task.
    ///
    /// A scheduler that went away without reporting counts as cancelled.
    pub async fn wait(self) -> TaskStatus {
        self.done.await.unwrap_or(TaskStatus::Cancelled)
    }
}

/// 遅延実行のスケジューラ
pub trait TaskScheduler: Send + Sync {
    /// Run `task` once after `delay`, unless cancelled first.
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) -> TaskHandle;
}
