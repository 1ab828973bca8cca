//! ReplyPicker の実装

use rand::Rng;

use crate::domain::ReplyPicker;

/// 一様乱数で定型文を選ぶ
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReplyPicker;

impl ReplyPicker for RandomReplyPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// 常に同じインデックスを返す（テスト・デモ用）
#[derive(Debug, Clone, Copy)]
pub struct FixedReplyPicker {
    index: usize,
}

impl FixedReplyPicker {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ReplyPicker for FixedReplyPicker {
    fn pick(&self, _len: usize) -> usize {
        self.index
    }
}
