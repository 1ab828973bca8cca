//! UseCase: チャット開始
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - OpenChatUseCase::execute() / execute_by_id()
//!
//! ### どのような状況を想定しているか
//! - 正常系：挨拶メッセージ 1 件でセッションが始まる
//! - 異常系：存在しない・不正なプレイヤー ID
//! - エッジケース：別のプレイヤーで開き直すと履歴が置き換わり、返信待ちがキャンセルされる

use std::sync::Arc;

use squadup_shared::time::Clock;

use crate::domain::{Player, PlayerId, PlayerRepository, RepositoryError, SessionId, Timestamp};

use super::{context::ChatContext, error::OpenChatError};

/// チャット開始のユースケース
pub struct OpenChatUseCase {
    context: Arc<ChatContext>,
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PlayerRepository>,
    clock: Arc<dyn Clock>,
}

impl OpenChatUseCase {
    pub fn new(
        context: Arc<ChatContext>,
        repository: Arc<dyn PlayerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            context,
            repository,
            clock,
        }
    }

    /// `player` とのチャットを開く
    ///
    /// 以前のセッションは破棄される。古い返信はポリシーに従ってキャンセルされる。
    pub async fn execute(&self, player: Player) -> SessionId {
        self.context.cancel_pending_replies().await;

        let now = Timestamp::new(self.clock.now_millis());
        let name = player.name.clone();
        let session_id = self.context.session().await.open_chat(player, now);

        tracing::info!("Opened chat {} with {}", session_id, name);
        session_id
    }

    /// プレイヤー ID を指定してチャットを開く
    pub async fn execute_by_id(&self, raw_id: &str) -> Result<SessionId, OpenChatError> {
        let id = PlayerId::new(raw_id.to_string())
            .map_err(|_| OpenChatError::InvalidPlayerId(raw_id.to_string()))?;
        let player = self
            .repository
            .find_player(&id)
            .await
            .map_err(|e| match e {
                RepositoryError::PlayerNotFound(id) => OpenChatError::PlayerNotFound(id),
                other => OpenChatError::Repository(other),
            })?;
        Ok(self.execute(player).await)
    }
}
