use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use uuid::Uuid;

use crate::db::DbService;
use crate::types::activity::{ActivityForm, AddActivityQuery};
use crate::types::response::{ApiResponse, ApiResult, StatusRes};

#[derive(Serialize)]
pub struct FormData {
    /// Pre-selected field when the form was reached from a field page.
    pub field: Option<entity::field::Model>,
    pub fields: Vec<entity::field::Model>,
    pub activity_types: Vec<entity::activity_type::Model>,
}

#[get("/activities/add")]
async fn activity_form(
    db: web::Data<DbService>,
    auth: BearerAuth,
    query: web::Query<AddActivityQuery>,
) -> ApiResult<FormData> {
    let user = db.session_user(auth.token()).await?;

    let field = match query.field_id {
        Some(id) => Some(db.get_owned_field(id, user.id).await?),
        None => None,
    };

    Ok(ApiResponse::Ok(FormData {
        field,
        fields: db.list_fields(user.id).await?,
        activity_types: db.list_activity_types().await?,
    }))
}

#[post("/activities/add")]
async fn add_activity(
    db: web::Data<DbService>,
    auth: BearerAuth,
    body: web::Form<ActivityForm>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let body = body.into_inner();

    let field = db.get_owned_field(body.field_id, user.id).await?;
    let new = body.parse()?;
    db.get_activity_type(new.activity_type_id).await?;

    db.create_activity(user.id, new).await?;
    Ok(ApiResponse::Created(StatusRes::new(
        "Activity added successfully!",
        format!("/fields/view/{}", field.id),
    )))
}

#[get("/activities/complete/{id}")]
async fn complete_activity(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let activity = db.get_owned_activity(path.into_inner(), user.id).await?;
    db.complete_activity(activity).await?;
    Ok(ApiResponse::Ok(StatusRes::new(
        "Activity marked as completed!",
        "/calendar",
    )))
}

#[get("/activities/delete/{id}")]
async fn delete_activity(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let activity = db.get_owned_activity(path.into_inner(), user.id).await?;
    db.delete_activity(activity.id).await?;
    Ok(ApiResponse::Ok(StatusRes::new(
        "Activity deleted successfully!",
        "/calendar",
    )))
}
