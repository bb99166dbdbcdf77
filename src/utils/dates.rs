use chrono::{Days, NaiveDate, NaiveTime};

use crate::types::error::AppError;

pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date {:?}, expected YYYY-MM-DD", s)))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| AppError::Validation(format!("invalid time {:?}, expected HH:MM", s)))
}

/// Expected harvest is planting date plus the product's growing period.
/// Computed once when the planting cycle is created; either input missing
/// means no expected date is recorded.
pub fn compute_expected_harvest(
    planting_date: Option<NaiveDate>,
    growing_period_days: Option<i32>,
) -> Option<NaiveDate> {
    match (planting_date, growing_period_days) {
        (Some(date), Some(days)) if days >= 0 => date.checked_add_days(Days::new(days as u64)),
        _ => None,
    }
}
