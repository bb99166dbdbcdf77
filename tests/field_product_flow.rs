mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_assign_product_derives_harvest_and_logs_planting() {
    println!("\n\n[+] Running test: test_assign_product_derives_harvest_and_logs_planting");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    let field = client.create_test_field(user_id, "Greenhouse row").await;
    let bearer = format!("Bearer {}", token);

    let req = test::TestRequest::post()
        .uri("/products/add")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([("name", "Tomato"), ("growing_period", "70")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let tomato = ctx.db.find_product_by_name("Tomato").await.unwrap().unwrap();

    println!("[>] Assigning Tomato planted 2024-03-01.");
    let req = test::TestRequest::post()
        .uri("/field_products/add")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([
            ("field_id", field.id.to_string()),
            ("product_id", tomato.id.to_string()),
            ("planting_date", "2024-03-01".to_string()),
            ("notes", "south rows".to_string()),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    // 70 days after 2024-03-01 is 2024-05-10
    let cycles = ctx.db.list_field_products(field.id).await.unwrap();
    assert_eq!(cycles.len(), 1);
    let (cycle, product) = &cycles[0];
    assert_eq!(product.as_ref().unwrap().name, "Tomato");
    assert_eq!(cycle.planting_date, Some(TestClient::date(2024, 3, 1)));
    assert_eq!(
        cycle.expected_harvest_date,
        Some(TestClient::date(2024, 5, 10))
    );
    assert_eq!(cycle.status, entity::field_product::CycleStatus::Active);

    println!("[>] Checking the auto-logged planting activity.");
    let activities = ctx.db.list_field_activities(field.id).await.unwrap();
    assert_eq!(activities.len(), 1);
    let (activity, kind) = &activities[0];
    assert_eq!(kind.as_ref().unwrap().name, "Planting");
    assert_eq!(activity.date, TestClient::date(2024, 3, 1));
    assert!(activity.completed);
    assert_eq!(activity.user_id, user_id);
    let notes = activity.notes.as_deref().unwrap();
    assert!(notes.contains("Tomato"));
    assert!(notes.contains("south rows"));
    println!("[/] Test passed.");
}

#[tokio::test]
async fn test_assign_without_planting_date_derives_nothing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    let field = client.create_test_field(user_id, "Fallow strip").await;
    let bearer = format!("Bearer {}", token);

    let req = test::TestRequest::post()
        .uri("/products/add")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([("name", "Rye"), ("growing_period", "100")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let rye = ctx.db.find_product_by_name("Rye").await.unwrap().unwrap();

    let req = test::TestRequest::post()
        .uri("/field_products/add")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([
            ("field_id", field.id.to_string()),
            ("product_id", rye.id.to_string()),
            ("planting_date", String::new()),
            ("notes", String::new()),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let cycles = ctx.db.list_field_products(field.id).await.unwrap();
    assert_eq!(cycles[0].0.planting_date, None);
    assert_eq!(cycles[0].0.expected_harvest_date, None);
    // no planting date, no companion activity
    assert!(ctx.db.list_field_activities(field.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_assign_guards_field_ownership_and_product_existence() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await;
    let (_intruder_id, intruder_token) = client.create_test_user(None).await;
    let field = client.create_test_field(owner_id, "Guarded plot").await;

    let req = test::TestRequest::post()
        .uri("/products/add")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_form([("name", "Maize")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let maize = ctx.db.find_product_by_name("Maize").await.unwrap().unwrap();

    // non-owner may not plant on someone else's field
    let req = test::TestRequest::post()
        .uri("/field_products/add")
        .insert_header(("Authorization", format!("Bearer {}", intruder_token)))
        .set_form([
            ("field_id", field.id.to_string()),
            ("product_id", maize.id.to_string()),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
    assert!(ctx.db.list_field_products(field.id).await.unwrap().is_empty());

    // unknown product is a 404 for the owner
    let req = test::TestRequest::post()
        .uri("/field_products/add")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_form([
            ("field_id", field.id.to_string()),
            ("product_id", uuid::Uuid::new_v4().to_string()),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
