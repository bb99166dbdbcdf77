use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginRes {
    pub token: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}
