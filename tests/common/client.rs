use actix_web::{web, App};
use chrono::NaiveDate;
use farmtrack::{
    db::{users::CreateUser, DbService},
    types::field::{FieldForm, NewField},
    utils::password::hash_password,
};
use uuid::Uuid;

pub struct TestClient {
    pub db: DbService,
}

impl TestClient {
    pub fn new(db: DbService) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.db.clone()))
            .configure(farmtrack::routes::configure_routes)
    }

    /// Registers a user directly against the db and opens a session,
    /// returning the user id and a bearer token.
    pub async fn create_test_user(&self, username: Option<&str>) -> (Uuid, String) {
        let suffix = Uuid::new_v4();
        let username = username
            .map(str::to_owned)
            .unwrap_or_else(|| format!("user-{}", suffix));
        let password_hash = hash_password("correct horse").expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(CreateUser {
                username,
                email: format!("{}@test.com", suffix),
                password_hash,
                name: Some("Test User".to_string()),
                phone: None,
            })
            .await
            .expect("Failed to create user");

        let token = self
            .db
            .create_session(user_id)
            .await
            .expect("Failed to create session");

        (user_id, token)
    }

    pub async fn create_test_field(&self, user_id: Uuid, name: &str) -> entity::field::Model {
        let new: NewField = FieldForm {
            name: name.to_string(),
            location: Some("North valley".to_string()),
            size: Some("2.5".to_string()),
            size_unit: Some("hectare".to_string()),
            description: None,
            center_lat: None,
            center_lng: None,
            zoom_level: None,
            map_bounds: None,
        }
        .parse()
        .expect("Valid field form");

        self.db
            .create_field(user_id, new)
            .await
            .expect("Failed to create field")
    }

    #[allow(dead_code)]
    pub async fn activity_type_id(&self, name: &str) -> Uuid {
        self.db
            .list_activity_types()
            .await
            .expect("Failed to list activity types")
            .into_iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("Activity type {} not seeded", name))
            .id
    }

    #[allow(dead_code)]
    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
