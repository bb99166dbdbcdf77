use actix_web::web;

pub mod activities;
pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod field_products;
pub mod fields;
pub mod health;
pub mod products;
pub mod profile;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(auth::register)
        .service(auth::login)
        .service(auth::logout)
        .service(dashboard::index)
        .service(fields::list_fields)
        .service(fields::add_field)
        .service(fields::edit_field)
        .service(fields::delete_field)
        .service(fields::view_field)
        .service(products::list_products)
        .service(products::add_product)
        .service(products::edit_product)
        .service(field_products::add_field_product)
        .service(activities::activity_form)
        .service(activities::add_activity)
        .service(activities::complete_activity)
        .service(activities::delete_activity)
        .service(calendar::month_view)
        .service(profile::view_profile)
        .service(profile::update_profile);
}
