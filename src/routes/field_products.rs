use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::DbService;
use crate::types::product::FieldProductForm;
use crate::types::response::{ApiResponse, ApiResult, StatusRes};
use crate::utils::dates::parse_date;
use crate::utils::forms::non_empty;

#[post("/field_products/add")]
async fn add_field_product(
    db: web::Data<DbService>,
    auth: BearerAuth,
    body: web::Form<FieldProductForm>,
) -> ApiResult<StatusRes> {
    let user = db.session_user(auth.token()).await?;
    let body = body.into_inner();

    let field = db.get_owned_field(body.field_id, user.id).await?;
    let product = db.get_product(body.product_id).await?;

    let planting_date = match non_empty(body.planting_date) {
        Some(d) => Some(parse_date(&d)?),
        None => None,
    };

    db.assign_product(
        &field,
        &product,
        user.id,
        planting_date,
        non_empty(body.notes),
    )
    .await?;

    Ok(ApiResponse::Created(StatusRes::new(
        "Product added to field successfully!",
        format!("/fields/view/{}", field.id),
    )))
}
