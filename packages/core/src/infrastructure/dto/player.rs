//! 名簿 JSON のレコード
//!
//! フィールド名は元のフロントエンドのデータ形式（camelCase）に合わせています。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub game: String,
    pub rank: String,
    pub rating: i32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub play_style: String,
    pub availability: String,
}
