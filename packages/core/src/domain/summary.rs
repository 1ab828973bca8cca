//! 名簿の集計（ゲームごとの人数・平均レーティング）

use super::{entity::Player, game::Game};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game: Game,
    pub players: usize,
    /// 四捨五入した平均値。プレイヤーがいなければ `None`
    pub average_rating: Option<i32>,
    pub top_rating: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    /// `Game::ALL` の順
    pub games: Vec<GameSummary>,
    pub total_players: usize,
    pub average_rating: Option<i32>,
}

impl RosterSummary {
    pub fn from_roster(roster: &[Player]) -> Self {
        let games = Game::ALL
            .into_iter()
            .map(|game| {
                let ratings: Vec<i32> = roster
                    .iter()
                    .filter(|p| p.game == game)
                    .map(|p| p.rating)
                    .collect();
                GameSummary {
                    game,
                    players: ratings.len(),
                    average_rating: rounded_mean(&ratings),
                    top_rating: ratings.iter().copied().max(),
                }
            })
            .collect();

        let all: Vec<i32> = roster.iter().map(|p| p.rating).collect();
        Self {
            games,
            total_players: roster.len(),
            average_rating: rounded_mean(&all),
        }
    }

    pub fn for_game(&self, game: Game) -> Option<&GameSummary> {
        self.games.iter().find(|summary| summary.game == game)
    }
}

fn rounded_mean(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    let mean = sum as f64 / values.len() as f64;
    Some(mean.round() as i32)
}
