pub mod activity;
pub mod calendar;
pub mod error;
pub mod field;
pub mod product;
pub mod response;
pub mod user;
