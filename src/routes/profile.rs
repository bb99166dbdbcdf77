use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::users::ProfileUpdate;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, StatusRes};
use crate::types::user::ProfileForm;
use crate::utils::forms::non_empty;
use crate::utils::password::{hash_password, verify_password};

#[get("/profile")]
async fn view_profile(
    db: web::Data<DbService>,
    auth: BearerAuth,
) -> ApiResult<entity::user::Model> {
    let user = db.session_user(auth.token()).await?;
    Ok(ApiResponse::Ok(user))
}

#[post("/profile")]
async fn update_profile(
    db: web::Data<DbService>,
    auth: BearerAuth,
    body: web::Form<ProfileForm>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let body = body.into_inner();

    let email = body.email.trim().to_owned();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if email != user.email && db.email_exists(&email).await? {
        return Err(AppError::Validation("email already registered".into()));
    }

    // a password change needs both the current and the new password
    let current = non_empty(body.current_password);
    let new = non_empty(body.new_password);
    let new_password_hash = match (current, new) {
        (Some(current), Some(new)) => {
            if !verify_password(&current, &user.password_hash) {
                return Err(AppError::Unauthorized("current password is incorrect".into()));
            }
            if Some(new.as_str()) != body.confirm_password.as_deref() {
                return Err(AppError::Validation("new passwords do not match".into()));
            }
            Some(
                hash_password(&new)
                    .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?,
            )
        }
        _ => None,
    };

    let changed_password = new_password_hash.is_some();
    db.update_profile(
        user,
        ProfileUpdate {
            name: non_empty(body.name),
            phone: non_empty(body.phone),
            email,
            new_password_hash,
        },
    )
    .await?;

    let message = if changed_password {
        "Profile updated and password changed successfully!"
    } else {
        "Profile updated successfully!"
    };
    Ok(ApiResponse::Ok(StatusRes::new(message, "/profile")))
}
