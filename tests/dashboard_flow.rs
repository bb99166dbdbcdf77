mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Days, Utc};
use common::{client::TestClient, TestContext};
use farmtrack::types::activity::NewActivity;

#[tokio::test]
async fn test_dashboard_unauthenticated_is_reduced() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["authenticated"], false);
    assert_eq!(body["fields_count"], 0);
}

#[tokio::test]
async fn test_dashboard_counts_and_upcoming_window() {
    println!("\n\n[+] Running test: test_dashboard_counts_and_upcoming_window");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    for name in ["Plot A", "Plot B", "Plot C"] {
        client.create_test_field(user_id, name).await;
    }
    let fields = ctx.db.list_fields(user_id).await.unwrap();
    let field_id = fields[0].id;
    let watering = client.activity_type_id("Watering").await;

    let today = Utc::now().date_naive();
    let in_3_days = today.checked_add_days(Days::new(3)).unwrap();
    let in_10_days = today.checked_add_days(Days::new(10)).unwrap();

    // inside the window
    ctx.db
        .create_activity(
            user_id,
            NewActivity {
                field_id,
                activity_type_id: watering,
                date: in_3_days,
                time: None,
                notes: Some("due soon".into()),
                completed: false,
            },
        )
        .await
        .unwrap();
    // outside the 7-day window
    ctx.db
        .create_activity(
            user_id,
            NewActivity {
                field_id,
                activity_type_id: watering,
                date: in_10_days,
                time: None,
                notes: None,
                completed: false,
            },
        )
        .await
        .unwrap();
    // inside the window but already done
    ctx.db
        .create_activity(
            user_id,
            NewActivity {
                field_id,
                activity_type_id: watering,
                date: today,
                time: None,
                notes: None,
                completed: true,
            },
        )
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["authenticated"], true);
    assert_eq!(body["fields_count"], 3);
    let upcoming = body["upcoming_activities"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["notes"], "due soon");
    println!("[/] Test passed.");
}

#[tokio::test]
async fn test_dashboard_upcoming_is_capped_at_five() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    let field = client.create_test_field(user_id, "Busy plot").await;
    let maintenance = client.activity_type_id("Maintenance").await;

    let today = Utc::now().date_naive();
    for offset in 0..7 {
        ctx.db
            .create_activity(
                user_id,
                NewActivity {
                    field_id: field.id,
                    activity_type_id: maintenance,
                    date: today.checked_add_days(Days::new(offset)).unwrap(),
                    time: None,
                    notes: None,
                    completed: false,
                },
            )
            .await
            .unwrap();
    }

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["upcoming_activities"].as_array().unwrap().len(), 5);
}
