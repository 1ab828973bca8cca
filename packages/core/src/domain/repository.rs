//! Repository trait 定義
//!
//! ドメイン層が必要とする名簿へのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Player, PlayerId, RepositoryError};

/// Player Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// 名簿の全プレイヤーを名簿順で取得
    async fn list_players(&self) -> Vec<Player>;

    /// ID でプレイヤーを取得
    async fn find_player(&self, id: &PlayerId) -> Result<Player, RepositoryError>;
}
