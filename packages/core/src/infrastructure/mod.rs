//! Infrastructure layer
//!
//! ドメイン層が定義する trait（Repository, TaskScheduler, ReplyPicker）の具体的な実装。

pub mod dto;
pub mod reply;
pub mod repository;
pub mod scheduler;
