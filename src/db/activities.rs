use chrono::{Days, NaiveDate, Utc};
use entity::activity::{
    ActiveModel as ActivityActive, Column, Entity as Activity, Model as ActivityModel,
};
use entity::activity_type::{Entity as ActivityType, Model as ActivityTypeModel};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};
use uuid::Uuid;

use crate::db::DbService;
use crate::types::activity::NewActivity;
use crate::types::error::AppError;
use crate::utils::token::new_id;

/// Seeded once at startup; the catalog is read-only afterwards.
const DEFAULT_ACTIVITY_TYPES: &[(&str, &str)] = &[
    ("Planting", "Planting seeds or seedlings"),
    ("Fertilizing", "Applying fertilizer to crops"),
    ("Watering", "Irrigation or watering plants"),
    ("Pesticide", "Applying pesticides or herbicides"),
    ("Harvesting", "Harvesting crops"),
    ("Soil preparation", "Preparing soil for planting"),
    ("Maintenance", "General field maintenance tasks"),
    ("Inspection", "Field or crop inspection"),
];

impl DbService {
    /// Idempotent bootstrap: each default type is inserted only if no
    /// type of that name exists yet.
    pub async fn seed_activity_types(&self) -> Result<(), AppError> {
        let mut seeded = 0;
        for (name, description) in DEFAULT_ACTIVITY_TYPES {
            let existing = ActivityType::find()
                .filter(entity::activity_type::Column::Name.eq(*name))
                .one(&self.db)
                .await?;
            if existing.is_none() {
                entity::activity_type::ActiveModel {
                    id: Set(new_id()),
                    name: Set((*name).to_owned()),
                    description: Set(Some((*description).to_owned())),
                }
                .insert(&self.db)
                .await?;
                seeded += 1;
            }
        }
        if seeded > 0 {
            info!("Seeded {} activity types", seeded);
        }
        Ok(())
    }

    pub async fn list_activity_types(&self) -> Result<Vec<ActivityTypeModel>, AppError> {
        Ok(ActivityType::find()
            .order_by_asc(entity::activity_type::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_activity_type(&self, id: Uuid) -> Result<ActivityTypeModel, AppError> {
        ActivityType::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_activity(&self, id: Uuid) -> Result<ActivityModel, AppError> {
        Activity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Activity-scoped ownership guard: authorization goes through the
    /// parent field's owner, not the activity's recorded actor.
    pub async fn get_owned_activity(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<ActivityModel, AppError> {
        let activity = self.get_activity(id).await?;
        let field = self.get_field(activity.field_id).await?;
        if field.user_id != user_id {
            return Err(AppError::Forbidden(
                "you do not have permission to access this activity".into(),
            ));
        }
        Ok(activity)
    }

    pub async fn create_activity(
        &self,
        acting_user: Uuid,
        new: NewActivity,
    ) -> Result<ActivityModel, AppError> {
        let am = ActivityActive {
            id: Set(new_id()),
            field_id: Set(new.field_id),
            user_id: Set(acting_user),
            activity_type_id: Set(new.activity_type_id),
            date: Set(new.date),
            time: Set(new.time),
            notes: Set(new.notes),
            completed: Set(new.completed),
            created_at: Set(Utc::now()),
        };
        Ok(am.insert(&self.db).await?)
    }

    pub async fn complete_activity(&self, activity: ActivityModel) -> Result<(), AppError> {
        let mut am: ActivityActive = activity.into();
        am.completed = Set(true);
        am.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete_activity(&self, id: Uuid) -> Result<(), AppError> {
        Activity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn list_field_activities(
        &self,
        field_id: Uuid,
    ) -> Result<Vec<(ActivityModel, Option<ActivityTypeModel>)>, AppError> {
        Ok(Activity::find()
            .filter(Column::FieldId.eq(field_id))
            .order_by_desc(Column::Date)
            .find_also_related(ActivityType)
            .all(&self.db)
            .await?)
    }

    /// Dashboard feed: the next incomplete activities on the user's
    /// fields within a week of `today`, inclusive, at most `limit`.
    pub async fn upcoming_activities(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<(ActivityModel, Option<ActivityTypeModel>)>, AppError> {
        let next_week = today
            .checked_add_days(Days::new(7))
            .ok_or_else(|| AppError::Internal("date overflow".into()))?;
        Ok(Activity::find()
            .join(JoinType::InnerJoin, entity::activity::Relation::Field.def())
            .filter(entity::field::Column::UserId.eq(user_id))
            .filter(Column::Date.gte(today))
            .filter(Column::Date.lte(next_week))
            .filter(Column::Completed.eq(false))
            .order_by_asc(Column::Date)
            .limit(limit)
            .find_also_related(ActivityType)
            .all(&self.db)
            .await?)
    }

    /// All activities on the user's fields within the date range,
    /// ordered by date then time ascending (the calendar query).
    pub async fn activities_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(ActivityModel, Option<ActivityTypeModel>)>, AppError> {
        Ok(Activity::find()
            .join(JoinType::InnerJoin, entity::activity::Relation::Field.def())
            .filter(entity::field::Column::UserId.eq(user_id))
            .filter(Column::Date.gte(start))
            .filter(Column::Date.lte(end))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time)
            .find_also_related(ActivityType)
            .all(&self.db)
            .await?)
    }
}
