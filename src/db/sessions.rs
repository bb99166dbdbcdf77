use chrono::Utc;
use entity::session::{ActiveModel as SessionActive, Column, Entity as Session};
use entity::user::Model as UserModel;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::utils::token::{new_id, new_token};

impl DbService {
    /// Mints a persistent session for the user and returns the bearer
    /// token the client presents from then on.
    pub async fn create_session(&self, user_id: Uuid) -> Result<String, AppError> {
        let token = new_token();
        Session::insert(SessionActive {
            id: Set(new_id()),
            token: Set(token.clone()),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .exec(&self.db)
        .await?;
        Ok(token)
    }

    pub async fn session_user_opt(&self, token: &str) -> Result<Option<UserModel>, AppError> {
        let session = Session::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await?;
        match session {
            Some(session) => Ok(session
                .find_related(entity::user::Entity)
                .one(&self.db)
                .await?),
            None => Ok(None),
        }
    }

    /// Resolves the presented token to its user; the contract every
    /// authenticated handler goes through.
    pub async fn session_user(&self, token: &str) -> Result<UserModel, AppError> {
        self.session_user_opt(token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("invalid or expired session".into()))
    }

    /// Logout is unconditional; deleting an unknown token is a no-op.
    pub async fn delete_session(&self, token: &str) -> Result<(), AppError> {
        Session::delete_many()
            .filter(Column::Token.eq(token))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
