// src/repository/user_repository.rs

use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter};

#[derive(Debug)]
pub struct UserRepository {
    db: DbConn,
}

/// 登録用の入力
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email_id: String,
    pub role: String,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーをユーザー名で検索
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    pub async fn create(&self, new_user: NewUser) -> Result<user_model::Model, DbErr> {
        let active_model = UserActiveModel {
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            email_id: Set(new_user.email_id),
            role: Set(new_user.role),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active_model.insert(&self.db).await
    }
}
