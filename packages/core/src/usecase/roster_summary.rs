//! UseCase: 名簿の集計

use std::sync::Arc;

use crate::domain::{PlayerRepository, RosterSummary};

pub struct GetRosterSummaryUseCase {
    repository: Arc<dyn PlayerRepository>,
}

impl GetRosterSummaryUseCase {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> RosterSummary {
        let roster = self.repository.list_players().await;
        RosterSummary::from_roster(&roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Game, infrastructure::repository::InMemoryPlayerRepository};

    #[tokio::test]
    async fn test_summary_of_seed_roster() {
        // テスト項目: シード名簿の集計結果が正しい
        // given (前提条件):
        let usecase =
            GetRosterSummaryUseCase::new(Arc::new(InMemoryPlayerRepository::seeded().unwrap()));

        // when (操作):
        let summary = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(summary.total_players, 6);
        let dota = summary.for_game(Game::Dota).unwrap();
        assert_eq!(dota.players, 2);
        assert_eq!(dota.average_rating, Some(4700));
        assert_eq!(dota.top_rating, Some(5200));
        assert_eq!(summary.for_game(Game::Valorant).unwrap().players, 1);
        // (4200 + 3800 + 4500 + 4100 + 5200 + 3900) / 6 = 4283.3
        assert_eq!(summary.average_rating, Some(4283));
    }
}
