use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::Utc;
use serde::Serialize;

use crate::db::DbService;
use crate::types::activity::ActivityRes;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub authenticated: bool,
    pub fields_count: usize,
    pub fields: Vec<entity::field::Model>,
    pub upcoming_activities: Vec<ActivityRes>,
}

/// The dashboard works without a session, just with reduced content.
#[get("/")]
async fn index(db: web::Data<DbService>, auth: Option<BearerAuth>) -> ApiResult<Response> {
    let user = match auth {
        Some(auth) => db.session_user_opt(auth.token()).await?,
        None => None,
    };

    let Some(user) = user else {
        return Ok(ApiResponse::Ok(Response {
            authenticated: false,
            fields_count: 0,
            fields: Vec::new(),
            upcoming_activities: Vec::new(),
        }));
    };

    let fields = db.list_fields(user.id).await?;
    let today = Utc::now().date_naive();
    let upcoming = db.upcoming_activities(user.id, today, 5).await?;

    Ok(ApiResponse::Ok(Response {
        authenticated: true,
        fields_count: fields.len(),
        fields,
        upcoming_activities: upcoming.into_iter().map(ActivityRes::from).collect(),
    }))
}
