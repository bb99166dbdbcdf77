use serde::Deserialize;

use crate::types::error::AppError;
use crate::utils::forms::{non_empty, parse_i32};

#[derive(Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: Option<String>,
    pub growing_period: Option<String>,
}

pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub growing_period: Option<i32>,
}

impl ProductForm {
    pub fn parse(self) -> Result<NewProduct, AppError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::Validation("product name is required".into()));
        }
        let growing_period = parse_i32(self.growing_period, "growing_period")?;
        if let Some(days) = growing_period {
            if days < 0 {
                return Err(AppError::Validation(
                    "growing_period must be non-negative".into(),
                ));
            }
        }
        Ok(NewProduct {
            name,
            description: non_empty(self.description),
            growing_period,
        })
    }
}

#[derive(Deserialize)]
pub struct FieldProductForm {
    pub field_id: uuid::Uuid,
    pub product_id: uuid::Uuid,
    pub planting_date: Option<String>,
    pub notes: Option<String>,
}
