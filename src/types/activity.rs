use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::utils::dates::{parse_date, parse_time};
use crate::utils::forms::non_empty;

#[derive(Deserialize)]
pub struct ActivityForm {
    pub field_id: Uuid,
    pub activity_type_id: Uuid,
    pub date: String,
    pub time: Option<String>,
    pub notes: Option<String>,
    /// Checkbox: presence means checked.
    pub completed: Option<String>,
}

pub struct NewActivity {
    pub field_id: Uuid,
    pub activity_type_id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub completed: bool,
}

impl ActivityForm {
    pub fn parse(self) -> Result<NewActivity, AppError> {
        let date = parse_date(&self.date)?;
        let time = match non_empty(self.time) {
            Some(t) => Some(parse_time(&t)?),
            None => None,
        };
        Ok(NewActivity {
            field_id: self.field_id,
            activity_type_id: self.activity_type_id,
            date,
            time,
            notes: non_empty(self.notes),
            completed: self.completed.is_some(),
        })
    }
}

#[derive(Deserialize)]
pub struct AddActivityQuery {
    pub field_id: Option<Uuid>,
}

/// Activity joined with its type's name for display.
#[derive(Serialize)]
pub struct ActivityRes {
    pub id: Uuid,
    pub field_id: Uuid,
    pub activity_type: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub completed: bool,
}

impl From<(entity::activity::Model, Option<entity::activity_type::Model>)> for ActivityRes {
    fn from(
        (activity, kind): (entity::activity::Model, Option<entity::activity_type::Model>),
    ) -> Self {
        ActivityRes {
            id: activity.id,
            field_id: activity.field_id,
            activity_type: kind.map(|t| t.name).unwrap_or_default(),
            date: activity.date,
            time: activity.time,
            notes: activity.notes,
            completed: activity.completed,
        }
    }
}
