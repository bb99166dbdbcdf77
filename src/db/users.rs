use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::utils::token::new_id;

pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    /// Already-hashed replacement credential, when a password change was
    /// requested and verified.
    pub new_password_hash: Option<String>,
}

impl DbService {
    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Signup. Uniqueness of username and email is checked here so the
    /// caller gets a validation failure, not a constraint violation.
    pub async fn create_user(&self, payload: CreateUser) -> Result<Uuid, AppError> {
        if self.username_exists(&payload.username).await? {
            return Err(AppError::Validation("username already in use".into()));
        }
        if self.email_exists(&payload.email).await? {
            return Err(AppError::Validation("email already registered".into()));
        }

        let uid = new_id();
        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            name: Set(payload.name),
            phone: Set(payload.phone),
            created_at: Set(Utc::now()),
        })
        .exec(&self.db)
        .await?;
        Ok(uid)
    }

    pub async fn update_profile(
        &self,
        user: UserModel,
        update: ProfileUpdate,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        am.name = Set(update.name);
        am.phone = Set(update.phone);
        am.email = Set(update.email);
        if let Some(hash) = update.new_password_hash {
            am.password_hash = Set(hash);
        }
        Ok(am.update(&self.db).await?)
    }
}
