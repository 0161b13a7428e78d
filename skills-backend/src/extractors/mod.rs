// src/extractors/mod.rs

//! 入力検証付き Extractor
//!
//! axum 標準の拒否レスポンス（422 等）ではなく、`AppError` の 400 系として返す。

use crate::error::AppError;
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::{FromRequest, FromRequestParts, Json, OriginalUri, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// URLパスからリソース名を推測する
fn resource_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // 末尾のIDの一つ前のセグメントから推測
    for segment in segments.iter().rev().skip(1) {
        match *segment {
            "skills" => return "skill",
            "evaluations" => return "evaluation",
            "employee-growth" | "employees" => return "employee",
            "departments" => return "department",
            _ => continue,
        }
    }

    "resource"
}

/// 整数IDのパスパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedId(pub i32);

impl ValidatedId {
    pub fn parse(raw: &str, path: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<i32>()
            .map(ValidatedId)
            .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource_label(path))))
    }
}

impl<S> FromRequestParts<S> for ValidatedId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // nest 配下では uri からプレフィックスが外れるため元の URI を優先する
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(format!("Missing {} ID", resource_label(&path))))?;

        Self::parse(&raw, &path)
    }
}

/// JSON ボディを受け取り `validator` で検証する
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| convert_validation_errors(errors, "request body"))?;

        Ok(ValidatedJson(value))
    }
}

/// クエリ文字列を受け取る。解析失敗は 400。
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ValidatedQuery(value))
    }
}
