use chrono::Utc;
use entity::product::{
    ActiveModel as ProductActive, Column, Entity as Product, Model as ProductModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::product::NewProduct;
use crate::utils::token::new_id;

/// The catalog is shared by all users, so adds are first-writer-wins:
/// a duplicate name is reported, never overwritten.
pub enum ProductAdd {
    Created(ProductModel),
    AlreadyExists(ProductModel),
}

impl DbService {
    pub async fn list_products(&self) -> Result<Vec<ProductModel>, AppError> {
        Ok(Product::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductModel, AppError> {
        Product::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn find_product_by_name(&self, name: &str) -> Result<Option<ProductModel>, AppError> {
        Ok(Product::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn add_product(&self, new: NewProduct) -> Result<ProductAdd, AppError> {
        if let Some(existing) = self.find_product_by_name(&new.name).await? {
            return Ok(ProductAdd::AlreadyExists(existing));
        }
        let am = ProductActive {
            id: Set(new_id()),
            name: Set(new.name),
            description: Set(new.description),
            growing_period: Set(new.growing_period),
            created_at: Set(Utc::now()),
        };
        Ok(ProductAdd::Created(am.insert(&self.db).await?))
    }

    pub async fn update_product(
        &self,
        product: ProductModel,
        patch: NewProduct,
    ) -> Result<ProductModel, AppError> {
        let mut am: ProductActive = product.into();
        am.name = Set(patch.name);
        am.description = Set(patch.description);
        am.growing_period = Set(patch.growing_period);
        Ok(am.update(&self.db).await?)
    }
}
