pub mod activities;
pub mod field_products;
pub mod fields;
pub mod products;
pub mod service;
pub mod sessions;
pub mod users;

pub use service::DbService;
