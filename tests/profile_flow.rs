mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_profile_update_without_password_change() {
    println!("\n\n[+] Running test: test_profile_update_without_password_change");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user(None).await;
    let bearer = format!("Bearer {}", token);

    let req = test::TestRequest::post()
        .uri("/profile")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([
            ("name", "Fatma Yılmaz"),
            ("phone", "+90 555 000 0000"),
            ("email", "fatma@example.com"),
        ])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let user = ctx.db.get_user_by_id(user_id).await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Fatma Yılmaz"));
    assert_eq!(user.email, "fatma@example.com");

    // the profile page never leaks the credential
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "fatma@example.com");
    assert!(body.get("password_hash").is_none());
    println!("[/] Test passed.");
}

#[tokio::test]
async fn test_profile_password_change_flow() {
    println!("\n\n[+] Running test: test_profile_password_change_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user(Some("selim")).await;
    let bearer = format!("Bearer {}", token);

    // wrong current password
    let req = test::TestRequest::post()
        .uri("/profile")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([
            ("name", "Selim"),
            ("email", "selim@example.com"),
            ("current_password", "wrong"),
            ("new_password", "new-secret"),
            ("confirm_password", "new-secret"),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    // mismatched confirmation
    let req = test::TestRequest::post()
        .uri("/profile")
        .insert_header(("Authorization", bearer.clone()))
        .set_form([
            ("name", "Selim"),
            ("email", "selim@example.com"),
            ("current_password", "correct horse"),
            ("new_password", "new-secret"),
            ("confirm_password", "other"),
        ])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // a valid change
    let req = test::TestRequest::post()
        .uri("/profile")
        .insert_header(("Authorization", bearer))
        .set_form([
            ("name", "Selim"),
            ("email", "selim@example.com"),
            ("current_password", "correct horse"),
            ("new_password", "new-secret"),
            ("confirm_password", "new-secret"),
        ])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // old password no longer logs in, the new one does
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "selim"), ("password", "correct horse")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "selim"), ("password", "new-secret")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    println!("[/] Test passed.");
}
