use chrono::Utc;
use entity::field::{ActiveModel as FieldActive, Column, Entity as Field, Model as FieldModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::field::{FieldPatch, NewField};
use crate::utils::token::new_id;

impl DbService {
    pub async fn list_fields(&self, user_id: Uuid) -> Result<Vec<FieldModel>, AppError> {
        Ok(Field::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_field(&self, id: Uuid) -> Result<FieldModel, AppError> {
        Field::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// The ownership guard. NotFound short-circuits before the owner
    /// check so a missing id never turns into a permission error.
    pub async fn get_owned_field(&self, id: Uuid, user_id: Uuid) -> Result<FieldModel, AppError> {
        let field = self.get_field(id).await?;
        if field.user_id != user_id {
            return Err(AppError::Forbidden(
                "you do not have permission to access this field".into(),
            ));
        }
        Ok(field)
    }

    pub async fn create_field(&self, user_id: Uuid, new: NewField) -> Result<FieldModel, AppError> {
        let now = Utc::now();
        let am = FieldActive {
            id: Set(new_id()),
            name: Set(new.name),
            location: Set(new.location),
            size: Set(new.size),
            size_unit: Set(new.size_unit),
            description: Set(new.description),
            center_lat: Set(new.center_lat),
            center_lng: Set(new.center_lng),
            zoom_level: Set(Some(new.zoom_level)),
            map_bounds: Set(new.map_bounds),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(am.insert(&self.db).await?)
    }

    pub async fn update_field(
        &self,
        field: FieldModel,
        patch: FieldPatch,
    ) -> Result<FieldModel, AppError> {
        let mut am: FieldActive = field.into();
        am.name = Set(patch.name);
        am.location = Set(patch.location);
        am.size = Set(patch.size);
        am.size_unit = Set(patch.size_unit);
        am.description = Set(patch.description);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Removes the field's planting cycles and activities before the
    /// field itself, all in one transaction; no orphaned child rows.
    pub async fn delete_field_cascade(&self, field_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        entity::field_product::Entity::delete_many()
            .filter(entity::field_product::Column::FieldId.eq(field_id))
            .exec(&txn)
            .await?;
        entity::activity::Entity::delete_many()
            .filter(entity::activity::Column::FieldId.eq(field_id))
            .exec(&txn)
            .await?;
        Field::delete_by_id(field_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
