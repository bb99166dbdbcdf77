pub mod user;
pub mod session;
pub mod field;
pub mod product;
pub mod field_product;
pub mod activity;
pub mod activity_type;

/*
 A user owns fields. Products form a shared catalog (one "Wheat" row for
 everyone, not per-user). A field_product row is one planting cycle of a
 product on a field; activities are dated tasks logged against a field.
 The activity_type catalog is seeded at startup and read-only after that.
 */
