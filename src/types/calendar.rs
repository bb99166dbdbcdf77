use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::activity::ActivityRes;

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Serialize)]
pub struct CalendarRes {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    /// Monday-first weeks; 0 marks padding cells outside the month.
    pub weeks: Vec<[u32; 7]>,
    pub activities_by_day: BTreeMap<u32, Vec<ActivityRes>>,
    pub today: NaiveDate,
    pub fields: Vec<entity::field::Model>,
    pub activity_types: Vec<entity::activity_type::Model>,
}
