// src/service/auth_service.rs
use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, LoginUser, RegisterRequest};
use crate::api::dto::MessageResponse;
use crate::domain::user_model::{UserClaims, DEFAULT_ROLE};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::{NewUser, UserRepository};
use crate::utils::error_helper::{conflict_error, internal_server_error, map_unique_violation};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use std::sync::Arc;
use tracing::{info, warn};

const DUPLICATE_USERNAME_MESSAGE: &str = "Username already exists";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials";

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー登録
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        let username = request.username.trim().to_string();

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(conflict_error(DUPLICATE_USERNAME_MESSAGE, "auth register"));
        }

        let password_hash = self
            .password_manager
            .hash_password(&request.password)
            .map_err(|e| match e {
                PasswordError::WeakPassword(message) => AppError::ValidationError(message),
                other => internal_server_error(other, "auth register", "Internal server error"),
            })?;

        let role = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .unwrap_or(DEFAULT_ROLE)
            .to_string();

        // 同時登録による一意制約違反も重複として扱う
        let user = self
            .user_repo
            .create(NewUser {
                username,
                password_hash,
                email_id: request.email_id,
                role,
            })
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_USERNAME_MESSAGE, "auth register"))?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(MessageResponse::new("User registered successfully"))
    }

    /// ログインしてアクセストークンを発行
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let Some(user) = self.user_repo.find_by_username(&request.username).await? else {
            warn!(username = %request.username, "Login failed: unknown user");
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ));
        };

        let matches = self
            .password_manager
            .verify_password(&request.password, &user.password_hash)
            .map_err(|e| internal_server_error(e, "auth login", "Internal Server Error"))?;

        if !matches {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ));
        }

        let token = self
            .jwt_manager
            .generate_access_token(UserClaims::from(&user))
            .map_err(|e| internal_server_error(e, "auth login", "Internal Server Error"))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: LoginUser::from(&user),
        })
    }
}
