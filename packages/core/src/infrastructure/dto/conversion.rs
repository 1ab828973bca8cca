//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    Age, Game, Player, PlayerId, RepositoryError, ValueObjectError, entity,
};
use crate::infrastructure::dto::player as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<dto::PlayerDto> for entity::Player {
    type Error = RepositoryError;

    fn try_from(dto: dto::PlayerDto) -> Result<Self, Self::Error> {
        let invalid = |reason: String| RepositoryError::InvalidRecord {
            id: dto.id.clone(),
            reason,
        };

        let id = PlayerId::new(dto.id.clone()).map_err(|e| invalid(e.to_string()))?;
        if dto.name.trim().is_empty() {
            return Err(invalid(ValueObjectError::EmptyPlayerName.to_string()));
        }
        let age = Age::new(dto.age).map_err(|e| invalid(e.to_string()))?;
        let game = dto
            .game
            .parse::<Game>()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Player {
            id,
            name: dto.name,
            age,
            game,
            rank: dto.rank,
            rating: dto.rating,
            description: dto.description,
            avatar: dto.avatar,
            languages: dto.languages,
            play_style: dto.play_style,
            availability: dto.availability,
        })
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::Player> for dto::PlayerDto {
    fn from(model: entity::Player) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            age: i64::from(model.age.value()),
            game: model.game.as_key().to_string(),
            rank: model.rank,
            rating: model.rating,
            description: model.description,
            avatar: model.avatar,
            languages: model.languages,
            play_style: model.play_style,
            availability: model.availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbitron_dto() -> dto::PlayerDto {
        dto::PlayerDto {
            id: "1".to_string(),
            name: "Orbitron".to_string(),
            age: 23,
            game: "dota".to_string(),
            rank: "Divine".to_string(),
            rating: 4200,
            description: "Ищу команду для участия в турнирах.".to_string(),
            avatar: None,
            languages: vec!["RU".to_string(), "EN".to_string()],
            play_style: "Support".to_string(),
            availability: "Вечером".to_string(),
        }
    }

    #[test]
    fn test_dto_player_to_domain() {
        // テスト項目: DTO の PlayerDto がドメインエンティティに変換される
        // given (前提条件):
        let dto_player = orbitron_dto();

        // when (操作):
        let player = entity::Player::try_from(dto_player).unwrap();

        // then (期待する結果):
        assert_eq!(player.id, PlayerId::new("1".to_string()).unwrap());
        assert_eq!(player.game, Game::Dota);
        assert_eq!(player.age.value(), 23);
        assert_eq!(player.rating, 4200);
        assert_eq!(player.languages, vec!["RU", "EN"]);
    }

    #[test]
    fn test_dto_with_unknown_game_is_rejected() {
        // テスト項目: 未知のゲームを持つレコードはエラーになる
        // given (前提条件):
        let mut dto_player = orbitron_dto();
        dto_player.game = "chess".to_string();

        // when (操作):
        let result = entity::Player::try_from(dto_player);

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(RepositoryError::InvalidRecord { ref id, .. }) if id == "1"
        ));
    }

    #[test]
    fn test_dto_with_invalid_age_or_name_is_rejected() {
        // テスト項目: 年齢が 0 以下、または名前が空のレコードはエラーになる
        // given (前提条件):
        let mut zero_age = orbitron_dto();
        zero_age.age = 0;
        let mut blank_name = orbitron_dto();
        blank_name.name = "  ".to_string();

        // when (操作) / then (期待する結果):
        assert!(entity::Player::try_from(zero_age).is_err());
        assert!(entity::Player::try_from(blank_name).is_err());
    }

    #[test]
    fn test_domain_player_to_dto() {
        // テスト項目: ドメインエンティティの Player が DTO に変換される
        // given (前提条件):
        let player = entity::Player::try_from(orbitron_dto()).unwrap();

        // when (操作):
        let dto_player: dto::PlayerDto = player.into();

        // then (期待する結果):
        assert_eq!(dto_player, orbitron_dto());
    }

    #[test]
    fn test_dto_uses_camel_case_field_names() {
        // テスト項目: JSON のフィールド名が camelCase で、avatar は省略可能
        // given (前提条件):
        let json = r#"{
            "id": "7", "name": "Tester", "age": 30, "game": "pubg",
            "rank": "Ace", "rating": 3000, "description": "",
            "playStyle": "Sniper", "availability": "Ночью"
        }"#;

        // when (操作):
        let dto_player: dto::PlayerDto = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(dto_player.play_style, "Sniper");
        assert_eq!(dto_player.avatar, None);
        assert!(dto_player.languages.is_empty());
    }
}
