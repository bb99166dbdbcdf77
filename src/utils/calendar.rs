//! Month-grid construction for the calendar page. Monday-first weeks,
//! 0-valued cells pad the days outside the month.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Month, NaiveDate};

use crate::types::error::AppError;

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("invalid year {}", year)))
}

/// First and last calendar day of the month, with December rolling the
/// end boundary into the next year.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start = first_of_month(year, month)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .ok_or_else(|| AppError::Validation(format!("invalid year {}", year)))?;
    Ok((start, end))
}

/// Ordered weeks of seven day-cells; a cell is the day-of-month number or
/// 0 for padding that keeps weekday alignment.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<[u32; 7]>, AppError> {
    let (start, end) = month_bounds(year, month)?;
    let leading = start.weekday().num_days_from_monday();
    let days_in_month = end.day();

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = leading as usize;
    for day in 1..=days_in_month {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0u32; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

pub fn month_name(month: u32) -> &'static str {
    Month::try_from(month as u8).map(|m| m.name()).unwrap_or("")
}

/// Buckets items by day-of-month, preserving input order within each day.
pub fn bucket_by_day<T>(items: Vec<T>, day_of: impl Fn(&T) -> u32) -> BTreeMap<u32, Vec<T>> {
    let mut buckets: BTreeMap<u32, Vec<T>> = BTreeMap::new();
    for item in items {
        buckets.entry(day_of(&item)).or_default().push(item);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(weeks: &[[u32; 7]]) -> Vec<u32> {
        weeks.iter().flatten().copied().filter(|d| *d > 0).collect()
    }

    #[test]
    fn grid_week_count_matches_padding_formula() {
        for (year, month) in [(2024, 1), (2024, 2), (2024, 12), (2025, 2), (2026, 8)] {
            let weeks = month_grid(year, month).unwrap();
            let (start, end) = month_bounds(year, month).unwrap();
            let leading = start.weekday().num_days_from_monday();
            let expected = (leading + end.day()).div_ceil(7) as usize;
            assert_eq!(weeks.len(), expected, "{}-{}", year, month);
        }
    }

    #[test]
    fn each_day_appears_once_in_order() {
        let weeks = month_grid(2024, 2).unwrap();
        let days = flatten(&weeks);
        assert_eq!(days, (1..=29).collect::<Vec<u32>>()); // 2024 is a leap year
    }

    #[test]
    fn monday_first_alignment() {
        // 2024-07-01 was a Monday: no leading padding
        let july = month_grid(2024, 7).unwrap();
        assert_eq!(july[0][0], 1);
        // 2024-09-01 was a Sunday: six cells of padding
        let september = month_grid(2024, 9).unwrap();
        assert_eq!(&september[0][..6], &[0, 0, 0, 0, 0, 0]);
        assert_eq!(september[0][6], 1);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (start, end) = month_bounds(2024, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(month_grid(2024, 0).is_err());
        assert!(month_grid(2024, 13).is_err());
        assert!(month_bounds(262144, 1).is_err());
    }

    #[test]
    fn buckets_preserve_order() {
        let buckets = bucket_by_day(vec![(3, "a"), (1, "b"), (3, "c")], |i| i.0);
        assert_eq!(buckets[&1], vec![(1, "b")]);
        assert_eq!(buckets[&3], vec![(3, "a"), (3, "c")]);
    }
}
