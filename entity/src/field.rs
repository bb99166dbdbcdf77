use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "field")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub size: Option<f64>,
    pub size_unit: SizeUnit,
    pub description: Option<String>,
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom_level: Option<i32>,
    /// Serialized boundary polygon, opaque to the server.
    pub map_bounds: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(
    Copy, Clone, Debug, Default, EnumIter, DeriveActiveEnum, Eq, PartialEq, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    #[sea_orm(string_value = "hectare")]
    Hectare,
    #[sea_orm(string_value = "acre")]
    Acre,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::field_product::Entity")]
    FieldProduct,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::field_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FieldProduct.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
