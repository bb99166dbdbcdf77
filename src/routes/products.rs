use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::Serialize;
use uuid::Uuid;

use crate::db::products::ProductAdd;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::product::ProductForm;
use crate::types::response::{ApiResponse, ApiResult, StatusRes};

#[derive(Serialize)]
pub struct ProductList {
    pub products: Vec<entity::product::Model>,
    /// The caller's fields, for the assign-product form.
    pub fields: Vec<entity::field::Model>,
}

#[get("/products")]
async fn list_products(db: web::Data<DbService>, auth: BearerAuth) -> ApiResult<ProductList> {
    let user = db.session_user(auth.token()).await?;
    Ok(ApiResponse::Ok(ProductList {
        products: db.list_products().await?,
        fields: db.list_fields(user.id).await?,
    }))
}

#[post("/products/add")]
async fn add_product(
    db: web::Data<DbService>,
    auth: BearerAuth,
    body: web::Form<ProductForm>,
) -> ApiResult<StatusRes> {
    db.session_user(auth.token()).await?;
    let new = body.into_inner().parse()?;
    // duplicate names are informational, not an error; the catalog keeps
    // the existing row untouched
    match db.add_product(new).await? {
        ProductAdd::Created(_) => Ok(ApiResponse::Created(StatusRes::new(
            "Product added successfully!",
            "/products",
        ))),
        ProductAdd::AlreadyExists(_) => Ok(ApiResponse::Ok(StatusRes::new(
            "Product already exists!",
            "/products",
        ))),
    }
}

#[post("/products/edit/{id}")]
async fn edit_product(
    db: web::Data<DbService>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
    body: web::Form<ProductForm>,
) -> ApiResult<StatusRes> {
    // catalog is global: any authenticated user may edit, no owner check
    db.session_user(auth.token()).await?;
    let product = db.get_product(path.into_inner()).await?;
    let patch = body.into_inner().parse()?;

    if let Some(existing) = db.find_product_by_name(&patch.name).await? {
        if existing.id != product.id {
            return Err(AppError::Validation("product name already in use".into()));
        }
    }

    db.update_product(product, patch).await?;
    Ok(ApiResponse::Ok(StatusRes::new(
        "Product updated successfully!",
        "/products",
    )))
}
