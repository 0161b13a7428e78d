// src/middleware/auth.rs

use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::logging::RequestContext;
use crate::utils::jwt::JwtManager;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info, warn};

pub const MISSING_TOKEN_MESSAGE: &str = "No Token Provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or Expired Token";

/// JWT認証ミドルウェアの設定
///
/// 公開ルート（登録・ログイン）はこのミドルウェアの外側にマウントする。
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
}

impl AuthMiddlewareConfig {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self { jwt_manager }
    }
}

/// 認証済みユーザー情報を格納するエクステンション
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> i32 {
        self.claims.user_id
    }
}

/// JWT認証ミドルウェア
///
/// ヘッダーが無い・Bearer 形式でない場合は 401、検証に失敗したトークンは 403。
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    // プリフライトは認証しない
    if request.method() == Method::OPTIONS {
        debug!(path = %path, "Skipping auth for preflight");
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(&headers).ok_or_else(|| {
        warn!(path = %path, "Missing authentication token");
        AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string())
    })?;

    let access_claims = config
        .jwt_manager
        .verify_access_token(&token)
        .map_err(|e| {
            warn!(path = %path, error = %e, "Invalid access token");
            AppError::Forbidden(INVALID_TOKEN_MESSAGE.to_string())
        })?;

    let user_claims = access_claims.user;

    info!(
        user_id = %user_claims.user_id,
        username = %user_claims.username,
        path = %path,
        "Authenticated request"
    );

    if let Some(context) = request.extensions_mut().get_mut::<RequestContext>() {
        context.user_id = Some(user_claims.user_id);
    }
    request
        .extensions_mut()
        .insert(AuthenticatedUser {
            claims: user_claims,
        });

    Ok(next.run(request).await)
}

/// CORS ミドルウェア設定
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

// --- ヘルパー関数 ---

/// Authorization ヘッダーから Bearer トークンを抽出
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

// --- Axum Extractors ---

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()))
    }
}
