// src/utils/validation.rs

//! DTO 共通のバリデーション定数とカスタム関数

use crate::domain::quarter::Quarter;
use validator::ValidationError;

/// ユーザー名の制約
pub mod username {
    pub const MIN_LENGTH: u64 = 3;
    pub const MAX_LENGTH: u64 = 50;
}

/// 名称（部署・スキル・カテゴリ・従業員）の制約
pub mod name {
    pub const MIN_LENGTH: u64 = 1;
    pub const MAX_LENGTH: u64 = 100;
}

/// 評価年の範囲
pub mod year {
    pub const MIN: i32 = 1900;
    pub const MAX: i32 = 2100;
}

/// 評価コメントの最大長
pub const COMMENT_MAX_LENGTH: u64 = 1000;

/// Q1〜Q4 のいずれか（大文字小文字は問わない）
pub fn validate_quarter(value: &str) -> Result<(), ValidationError> {
    value.parse::<Quarter>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("invalid_quarter");
        error.message = Some("Quarter must be one of Q1, Q2, Q3, Q4".into());
        error
    })
}

/// 空白のみの文字列を拒否する
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Value must not be blank".into());
        return Err(error);
    }
    Ok(())
}
