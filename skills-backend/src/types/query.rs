// src/types/query.rs

use serde::{Deserialize, Deserializer, Serialize};

/// 既定の取得件数
pub const DEFAULT_LIMIT: u64 = 10;
/// 取得件数の上限
pub const MAX_LIMIT: u64 = 1000;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

/// 文字列または数値から u64 をデシリアライズ（空文字は既定値扱い）
fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => u64::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom("value must not be negative")),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// 文字列または数値から i32 をデシリアライズ
///
/// 空文字と `all` は未指定として扱う。
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(StringOrNumber::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
                Ok(None)
            } else {
                trimmed
                    .parse::<i32>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Number(f64),
}

fn parse_f64<E: serde::de::Error>(raw: &str) -> Result<f64, E> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| E::custom(format!("invalid number: {:?}", raw)))
}

/// 文字列または数値から f64 をデシリアライズ（フォーム入力の "7" 等）
pub fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Number(n) => Ok(n),
        StringOrFloat::String(s) => parse_f64(&s),
    }
}

/// `deserialize_f64_lenient` の Option 版。空文字は未指定扱い。
pub fn deserialize_optional_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrFloat::Number(n)) => Ok(Some(n)),
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrFloat::String(s)) => parse_f64(&s).map(Some),
    }
}

/// 文字列または数値から i32 をデシリアライズ（必須項目用）
pub fn deserialize_i32_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => i32::try_from(n).map_err(serde::de::Error::custom),
        StringOrNumber::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {:?}", s))),
    }
}

/// limit / offset 形式のページネーション
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LimitOffsetQuery {
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub offset: Option<u64>,
}

impl LimitOffsetQuery {
    /// (limit, offset)。limit は 1..=MAX_LIMIT に丸める。
    pub fn window(&self) -> (u64, u64) {
        let limit = self.limit.unwrap_or_else(default_limit).clamp(1, MAX_LIMIT);
        (limit, self.offset.unwrap_or(0))
    }
}

/// ソート順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// 大文字小文字を区別せずに解析し、不明な値は昇順とする
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}
