use chrono::{NaiveDate, Utc};
use entity::field_product::{
    ActiveModel as FieldProductActive, Column, Entity as FieldProduct, Model as FieldProductModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::utils::dates::compute_expected_harvest;
use crate::utils::token::new_id;

impl DbService {
    pub async fn list_field_products(
        &self,
        field_id: Uuid,
    ) -> Result<Vec<(FieldProductModel, Option<entity::product::Model>)>, AppError> {
        Ok(FieldProduct::find()
            .filter(Column::FieldId.eq(field_id))
            .find_also_related(entity::product::Entity)
            .all(&self.db)
            .await?)
    }

    /// Starts a planting cycle of `product` on `field`. The expected
    /// harvest date is derived here, once; edits never recompute it.
    /// When a planting date is given and the "Planting" activity type is
    /// seeded, a completed companion activity is logged in the same
    /// transaction, so the pair commits or fails as a unit.
    pub async fn assign_product(
        &self,
        field: &entity::field::Model,
        product: &entity::product::Model,
        acting_user: Uuid,
        planting_date: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Result<FieldProductModel, AppError> {
        let expected_harvest_date = compute_expected_harvest(planting_date, product.growing_period);
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let cycle = FieldProductActive {
            id: Set(new_id()),
            field_id: Set(field.id),
            product_id: Set(product.id),
            planting_date: Set(planting_date),
            expected_harvest_date: Set(expected_harvest_date),
            status: Set(entity::field_product::CycleStatus::Active),
            notes: Set(notes.clone()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        if let Some(date) = planting_date {
            let planting_type = entity::activity_type::Entity::find()
                .filter(entity::activity_type::Column::Name.eq("Planting"))
                .one(&txn)
                .await?;
            if let Some(planting_type) = planting_type {
                let note = match &notes {
                    Some(n) => format!("Planted {}. {}", product.name, n),
                    None => format!("Planted {}.", product.name),
                };
                entity::activity::ActiveModel {
                    id: Set(new_id()),
                    field_id: Set(field.id),
                    user_id: Set(acting_user),
                    activity_type_id: Set(planting_type.id),
                    date: Set(date),
                    time: Set(None),
                    notes: Set(Some(note)),
                    completed: Set(true),
                    created_at: Set(now),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;
        Ok(cycle)
    }
}
