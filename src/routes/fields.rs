use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use uuid::Uuid;

use crate::db::DbService;
use crate::types::activity::ActivityRes;
use crate::types::field::{FieldEditForm, FieldForm, FieldProductRes};
use crate::types::response::{ApiResponse, ApiResult, StatusRes};

#[derive(Serialize)]
pub struct FieldList {
    pub fields: Vec<entity::field::Model>,
}

#[get("/fields")]
async fn list_fields(db: web::Data<DbService>, auth: BearerAuth) -> ApiResult<FieldList> {
    let user = db.session_user(auth.token()).await?;
    let fields = db.list_fields(user.id).await?;
    Ok(ApiResponse::Ok(FieldList { fields }))
}

#[post("/fields/add")]
async fn add_field(
    db: web::Data<DbService>,
    auth: BearerAuth,
    body: web::Form<FieldForm>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let new = body.into_inner().parse()?;
    db.create_field(user.id, new).await?;
    Ok(ApiResponse::Created(StatusRes::new(
        "Field added successfully!",
        "/fields",
    )))
}

#[post("/fields/edit/{id}")]
async fn edit_field(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
    body: web::Form<FieldEditForm>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let field = db.get_owned_field(path.into_inner(), user.id).await?;
    let patch = body.into_inner().parse()?;
    db.update_field(field, patch).await?;
    Ok(ApiResponse::Ok(StatusRes::new(
        "Field updated successfully!",
        "/fields",
    )))
}

#[get("/fields/delete/{id}")]
async fn delete_field(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let field = db.get_owned_field(path.into_inner(), user.id).await?;
    db.delete_field_cascade(field.id).await?;
    Ok(ApiResponse::Ok(StatusRes::new(
        "Field deleted successfully!",
        "/fields",
    )))
}

#[derive(Serialize)]
pub struct FieldDetail {
    pub field: entity::field::Model,
    pub field_products: Vec<FieldProductRes>,
    /// Full catalog, for the assign-product form.
    pub products: Vec<entity::product::Model>,
    pub activities: Vec<ActivityRes>,
}

#[get("/fields/view/{id}")]
async fn view_field(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<FieldDetail> {
    let user = db.session_user(auth.token()).await?;
    let field = db.get_owned_field(path.into_inner(), user.id).await?;

    let field_products = db.list_field_products(field.id).await?;
    let products = db.list_products().await?;
    let activities = db.list_field_activities(field.id).await?;

    Ok(ApiResponse::Ok(FieldDetail {
        field,
        field_products: field_products
            .into_iter()
            .map(FieldProductRes::from)
            .collect(),
        products,
        activities: activities.into_iter().map(ActivityRes::from).collect(),
    }))
}
