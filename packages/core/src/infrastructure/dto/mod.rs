//! Data Transfer Objects
//!
//! 外部フォーマット（JSON）とドメインモデルの境界。

pub mod conversion;
pub mod player;

pub use player::PlayerDto;
