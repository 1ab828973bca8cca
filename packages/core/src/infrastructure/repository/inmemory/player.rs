//! InMemory Player Repository 実装
//!
//! ドメイン層が定義する PlayerRepository trait の具体的な実装。
//! 名簿は起動時に読み込まれ、以後変更されません。

use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    domain::{Player, PlayerId, PlayerRepository, RepositoryError},
    infrastructure::dto::PlayerDto,
};

/// 組み込みのシード名簿
const SEED_ROSTER: &str = include_str!("seed_roster.json");

/// インメモリ Player Repository 実装
#[derive(Debug, Clone)]
pub struct InMemoryPlayerRepository {
    players: Vec<Player>,
}

impl InMemoryPlayerRepository {
    /// Build a repository from `players`, rejecting duplicate IDs.
    pub fn new(players: Vec<Player>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id.as_str()) {
                return Err(RepositoryError::DuplicatePlayerId(
                    player.id.as_str().to_string(),
                ));
            }
        }
        Ok(Self { players })
    }

    /// The six mock players of the built-in roster.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Self::from_json(SEED_ROSTER)
    }

    /// Parse a JSON array of player records.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let records: Vec<PlayerDto> = serde_json::from_str(json)
            .map_err(|e| RepositoryError::MalformedRoster(e.to_string()))?;
        let players = records
            .into_iter()
            .map(Player::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded roster with {} players", players.len());
        Self::new(players)
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn list_players(&self) -> Vec<Player> {
        self.players.clone()
    }

    async fn find_player(&self, id: &PlayerId) -> Result<Player, RepositoryError> {
        self.players
            .iter()
            .find(|player| &player.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::PlayerNotFound(id.as_str().to_string()))
    }
}
