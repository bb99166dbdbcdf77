use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub field_id: Uuid,
    /// The acting user at creation time. Authorization goes through the
    /// field's owner, this column is attribution only.
    pub user_id: Uuid,
    pub activity_type_id: Uuid,
    pub date: Date,
    pub time: Option<Time>,
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::field::Entity",
        from = "Column::FieldId",
        to = "super::field::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Field,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::activity_type::Entity",
        from = "Column::ActivityTypeId",
        to = "super::activity_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ActivityType,
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::activity_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
