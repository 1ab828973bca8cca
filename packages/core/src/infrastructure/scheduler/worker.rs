//! Tokio 上の TaskScheduler 実装
//!
//! 予約されたタスクは 1 つのワーカータスクがキューから順に取り出して実行します。
//! 遅延が同じであれば予約した順（FIFO）に発火します。

use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::{
    sync::{mpsc, oneshot},
    time::Instant,
};

use crate::domain::{CancelToken, TaskHandle, TaskScheduler, TaskStatus};

struct Job {
    deadline: Instant,
    task: BoxFuture<'static, ()>,
    token: CancelToken,
    done: oneshot::Sender<TaskStatus>,
}

/// Tokio のタイマーを使ったスケジューラ
///
/// Jobs run one after another in the order they were scheduled; a job never
/// runs before its deadline, but may run after it when an earlier job had a
/// longer delay.
#[derive(Debug, Clone)]
pub struct TokioTaskScheduler {
    jobs: mpsc::UnboundedSender<Job>,
}

impl TokioTaskScheduler {
    /// Create the scheduler and spawn its worker. Must be called within a Tokio runtime.
    pub fn new() -> Self {
        let (jobs, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(queue));
        Self { jobs }
    }
}

impl TaskScheduler for TokioTaskScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) -> TaskHandle {
        let token = CancelToken::new();
        let (done, done_rx) = oneshot::channel();
        let job = Job {
            deadline: Instant::now() + delay,
            task,
            token: token.clone(),
            done,
        };

        if self.jobs.send(job).is_err() {
            tracing::warn!("Scheduler worker has stopped; task dropped");
            token.cancel();
        }

        TaskHandle::new(token, done_rx)
    }
}

async fn run_worker(mut queue: mpsc::UnboundedReceiver<Job>) {
    while let Some(job) = queue.recv().await {
        if !job.token.is_cancelled() {
            tokio::time::sleep_until(job.deadline).await;
        }

        let status = if job.token.try_fire() {
            job.task.await;
            TaskStatus::Fired
        } else {
            TaskStatus::Cancelled
        };
        // the handle may have been dropped
        let _ = job.done.send(status);
    }
    tracing::debug!("Scheduler worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::sync::{Arc, Mutex};

    fn recorder() -> Arc<Mutex<Vec<u32>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn record(log: &Arc<Mutex<Vec<u32>>>, value: u32) -> BoxFuture<'static, ()> {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(value);
        }
        .boxed()
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_fires_after_delay() {
        // テスト項目: 予約したタスクは遅延時間が経過してから実行される
        // given (前提条件):
        let scheduler = TokioTaskScheduler::new();
        let log = recorder();
        let started = Instant::now();

        // when (操作):
        let handle = scheduler.schedule(Duration::from_millis(1000), record(&log, 1));
        tokio::time::sleep(Duration::from_millis(999)).await;
        let before = log.lock().unwrap().clone();
        let status = handle.wait().await;

        // then (期待する結果):
        assert!(before.is_empty());
        assert_eq!(status, TaskStatus::Fired);
        assert_eq!(*log.lock().unwrap(), vec![1]);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tasks_fire_in_issue_order() {
        // テスト項目: 同じ遅延で予約したタスクは予約順に全て実行される
        // given (前提条件):
        let scheduler = TokioTaskScheduler::new();
        let log = recorder();

        // when (操作):
        let handles: Vec<TaskHandle> = (1..=3)
            .map(|i| scheduler.schedule(Duration::from_millis(1000), record(&log, i)))
            .collect();
        let mut statuses = Vec::new();
        for handle in handles {
            statuses.push(handle.wait().await);
        }

        // then (期待する結果):
        assert_eq!(statuses, vec![TaskStatus::Fired; 3]);
        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_does_not_run() {
        // テスト項目: キャンセルしたタスクは実行されず、他のタスクには影響しない
        // given (前提条件):
        let scheduler = TokioTaskScheduler::new();
        let log = recorder();
        let first = scheduler.schedule(Duration::from_millis(1000), record(&log, 1));
        let second = scheduler.schedule(Duration::from_millis(1000), record(&log, 2));

        // when (操作):
        assert!(first.cancel());
        let first_status = first.wait().await;
        let second_status = second.wait().await;

        // then (期待する結果):
        assert_eq!(first_status, TaskStatus::Cancelled);
        assert_eq!(second_status, TaskStatus::Fired);
        assert_eq!(*log.lock().unwrap(), vec![2]);
    }
}
