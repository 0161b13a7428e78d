// src/api/dto/common.rs

use serde::{Deserialize, Serialize};

/// メッセージのみのレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 総件数（ダッシュボードは配列の先頭要素を読む）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountEntry {
    pub count: i64,
}

/// `{ result, dataSize: [{ count }] }` 形式の一覧レスポンス
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub result: Vec<T>,
    #[serde(rename = "dataSize")]
    pub data_size: Vec<CountEntry>,
}

impl<T> PagedResult<T> {
    pub fn new(result: Vec<T>, total: i64) -> Self {
        Self {
            result,
            data_size: vec![CountEntry { count: total }],
        }
    }
}
