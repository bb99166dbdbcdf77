//! Form fields arrive as strings; blank means "not supplied".

use crate::types::error::AppError;

pub fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim().to_owned();
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    })
}

pub fn parse_f64(value: Option<String>, name: &str) -> Result<Option<f64>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} must be a number", name))),
    }
}

pub fn parse_i32(value: Option<String>, name: &str) -> Result<Option<i32>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} must be an integer", name))),
    }
}
