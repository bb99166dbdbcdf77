use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::users::CreateUser;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, StatusRes};
use crate::types::user::{LoginForm, LoginRes, RegisterForm};
use crate::utils::forms::non_empty;
use crate::utils::password::{hash_password, verify_password};

#[post("/register")]
async fn register(db: web::Data<DbService>, body: web::Form<RegisterForm>) -> ApiResult<StatusRes> {
    let body = body.into_inner();
    let username = body.username.trim().to_owned();
    let email = body.email.trim().to_owned();
    if username.is_empty() || email.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "username, email and password are required".into(),
        ));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

    db.create_user(CreateUser {
        username,
        email,
        password_hash,
        name: non_empty(body.name),
        phone: non_empty(body.phone),
    })
    .await?;

    Ok(ApiResponse::Created(StatusRes::new(
        "Registration successful! You can now log in.",
        "/login",
    )))
}

#[post("/login")]
async fn login(db: web::Data<DbService>, body: web::Form<LoginForm>) -> ApiResult<LoginRes> {
    let user = db.get_user_by_username(body.username.trim()).await?;
    // same failure for unknown user and bad password
    let user = match user {
        Some(u) if verify_password(&body.password, &u.password_hash) => u,
        _ => return Err(AppError::Unauthorized("invalid username or password".into())),
    };

    let token = db.create_session(user.id).await?;
    Ok(ApiResponse::Ok(LoginRes {
        token,
        message: format!("Welcome back, {}!", user.username),
    }))
}

#[get("/logout")]
async fn logout(db: web::Data<DbService>, auth: Option<BearerAuth>) -> ApiResult<StatusRes> {
    if let Some(auth) = auth {
        db.delete_session(auth.token()).await?;
    }
    Ok(ApiResponse::Ok(StatusRes::new("Logged out.", "/")))
}
