// src/api/dto/auth_dto.rs

use crate::domain::user_model;
use crate::utils::validation::{self, username};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(
        length(
            min = username::MIN_LENGTH,
            max = username::MAX_LENGTH,
            message = "Username must be between 3 and 50 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default, rename = "emailId")]
    #[validate(email(message = "Invalid email format"))]
    pub email_id: String,

    #[validate(length(min = 1, max = 30, message = "Role must be between 1 and 30 characters"))]
    pub role: Option<String>,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<&user_model::Model> for LoginUser {
    fn from(user: &user_model::Model) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoginUser,
}
