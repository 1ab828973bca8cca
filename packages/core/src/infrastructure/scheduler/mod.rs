//! TaskScheduler の実装

mod worker;

pub use worker::TokioTaskScheduler;
