//! UseCase: 名簿のフィルタ

use std::sync::Arc;

use crate::domain::{FilterCriteria, Game, Player, PlayerRepository, filter_players};

/// 名簿フィルタのユースケース
pub struct FilterPlayersUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PlayerRepository>,
}

impl FilterPlayersUseCase {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    /// 条件に一致するプレイヤーを名簿順で返す（0 件でもエラーにしない）
    pub async fn execute(&self, criteria: &FilterCriteria) -> Vec<Player> {
        let roster = self.repository.list_players().await;
        let matches = filter_players(&roster, criteria);
        tracing::debug!(
            "Filtered roster: {}/{} players match {:?}",
            matches.len(),
            roster.len(),
            criteria
        );
        matches
    }

    /// ランクの選択肢
    pub fn ranks(&self, game: Game) -> &'static [&'static str] {
        game.ranks()
    }
}
