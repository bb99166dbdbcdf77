use entity::field::SizeUnit;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::forms::{non_empty, parse_f64, parse_i32};

#[derive(Deserialize)]
pub struct FieldForm {
    pub name: String,
    pub location: Option<String>,
    pub size: Option<String>,
    pub size_unit: Option<String>,
    pub description: Option<String>,
    pub center_lat: Option<String>,
    pub center_lng: Option<String>,
    pub zoom_level: Option<String>,
    pub map_bounds: Option<String>,
}

/// Field edits only touch the descriptive columns; map data is set once
/// at creation.
#[derive(Deserialize)]
pub struct FieldEditForm {
    pub name: String,
    pub location: Option<String>,
    pub size: Option<String>,
    pub size_unit: Option<String>,
    pub description: Option<String>,
}

pub struct NewField {
    pub name: String,
    pub location: Option<String>,
    pub size: Option<f64>,
    pub size_unit: SizeUnit,
    pub description: Option<String>,
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom_level: i32,
    pub map_bounds: Option<String>,
}

pub struct FieldPatch {
    pub name: String,
    pub location: Option<String>,
    pub size: Option<f64>,
    pub size_unit: SizeUnit,
    pub description: Option<String>,
}

fn parse_name(name: String) -> Result<String, AppError> {
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(AppError::Validation("field name is required".into()));
    }
    Ok(name)
}

fn parse_size(size: Option<String>) -> Result<Option<f64>, AppError> {
    let size = parse_f64(size, "size")?;
    if let Some(s) = size {
        if s < 0.0 {
            return Err(AppError::Validation("size must be non-negative".into()));
        }
    }
    Ok(size)
}

pub fn parse_size_unit(unit: Option<String>) -> Result<SizeUnit, AppError> {
    match non_empty(unit).as_deref() {
        None | Some("hectare") => Ok(SizeUnit::Hectare),
        Some("acre") => Ok(SizeUnit::Acre),
        Some(other) => Err(AppError::Validation(format!(
            "size_unit must be hectare or acre, got {}",
            other
        ))),
    }
}

impl FieldForm {
    pub fn parse(self) -> Result<NewField, AppError> {
        Ok(NewField {
            name: parse_name(self.name)?,
            location: non_empty(self.location),
            size: parse_size(self.size)?,
            size_unit: parse_size_unit(self.size_unit)?,
            description: non_empty(self.description),
            center_lat: parse_f64(self.center_lat, "center_lat")?,
            center_lng: parse_f64(self.center_lng, "center_lng")?,
            zoom_level: parse_i32(self.zoom_level, "zoom_level")?.unwrap_or(15),
            map_bounds: non_empty(self.map_bounds),
        })
    }
}

impl FieldEditForm {
    pub fn parse(self) -> Result<FieldPatch, AppError> {
        Ok(FieldPatch {
            name: parse_name(self.name)?,
            location: non_empty(self.location),
            size: parse_size(self.size)?,
            size_unit: parse_size_unit(self.size_unit)?,
            description: non_empty(self.description),
        })
    }
}

/// One planting cycle joined with its product's name for display.
#[derive(Serialize)]
pub struct FieldProductRes {
    pub id: uuid::Uuid,
    pub product_id: uuid::Uuid,
    pub product_name: String,
    pub planting_date: Option<chrono::NaiveDate>,
    pub expected_harvest_date: Option<chrono::NaiveDate>,
    pub status: entity::field_product::CycleStatus,
    pub notes: Option<String>,
}

impl From<(entity::field_product::Model, Option<entity::product::Model>)> for FieldProductRes {
    fn from(
        (fp, product): (entity::field_product::Model, Option<entity::product::Model>),
    ) -> Self {
        FieldProductRes {
            id: fp.id,
            product_id: fp.product_id,
            product_name: product.map(|p| p.name).unwrap_or_default(),
            planting_date: fp.planting_date,
            expected_harvest_date: fp.expected_harvest_date,
            status: fp.status,
            notes: fp.notes,
        }
    }
}
