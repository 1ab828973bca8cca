//! Canned replies of the simulated teammate

/// 自動返信の定型文
pub const CANNED_REPLIES: [&str; 5] = [
    "Отлично! Когда можем сыграть?",
    "Звучит интересно, давай попробуем!",
    "Сейчас в игре, напишу чуть позже.",
    "Какой у тебя ранг и на какой позиции играешь?",
    "Давай добавимся в друзья и созвонимся в Discord!",
];

/// Randomness source for choosing a canned reply.
#[cfg_attr(test, mockall::automock)]
pub trait ReplyPicker: Send + Sync {
    /// Return an index in `0..len`.
    fn pick(&self, len: usize) -> usize;
}

/// Choose a canned reply. Out-of-range indices wrap around.
pub fn pick_reply(picker: &dyn ReplyPicker) -> &'static str {
    let index = picker.pick(CANNED_REPLIES.len()) % CANNED_REPLIES.len();
    CANNED_REPLIES[index]
}
