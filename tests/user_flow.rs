mod common;

use account_service::types::user::UserRes;
use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_user_creation_flow_success() {
    println!("\n\n[+] Running test: test_user_creation_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    println!("[>] Sending request to create user: {:?}", user_data.username);
    let req = test::TestRequest::post()
        .uri("/users/create")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["username"], "pet");
    assert_eq!(body["email"], "pet@gmail.com");
    assert!(body.get("password").is_none());

    let stored = ctx.db.get_user_by_email("pet@gmail.com").await.unwrap();
    assert_ne!(stored.password, "password");
    println!("[/] Test passed: User creation flow successful.");
}

#[tokio::test]
async fn test_user_creation_flow_rejections() {
    println!("\n\n[+] Running test: test_user_creation_flow_rejections");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test::TestRequest::post()
        .uri("/users/create")
        .set_json(test_data::sample_user())
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let samples = [
        (json!({"username": "Frank", "email": "pet@gmail.com", "password": "password"}), StatusCode::CONFLICT, "Email Already Taken"),
        (json!({"username": "pet", "email": "grand@gmail.com", "password": "password"}), StatusCode::CONFLICT, "Username Already Taken"),
        (json!({"username": "pet", "email": "kangmail.com", "password": "password"}), StatusCode::UNPROCESSABLE_ENTITY, "Invalid Email"),
        (json!({"username": "", "email": "kan@gmail.com", "password": "password"}), StatusCode::UNPROCESSABLE_ENTITY, "Required Username"),
        (json!({"username": "kan", "email": "", "password": "password"}), StatusCode::UNPROCESSABLE_ENTITY, "Required Email"),
        (json!({"username": "kan", "email": "kan@gmail.com", "password": ""}), StatusCode::UNPROCESSABLE_ENTITY, "Required Password"),
    ];

    for (input, status, message) in samples {
        println!("[>] Creating user with {}", input);
        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_json(&input)
            .to_request();

        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), status);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message);
    }

    assert_eq!(ctx.db.get_all_users().await.unwrap().len(), 1);
    println!("[/] Test passed: every invalid registration was refused.");
}

#[tokio::test]
async fn test_user_creation_flow_malformed_body() {
    println!("\n\n[+] Running test: test_user_creation_flow_malformed_body");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    for input in [
        json!({"username": "kan", "email": "kan@gmail.com"}),
        json!({"username": "kan", "email": "kan@gmail.com", "password": "password", "admin": true}),
    ] {
        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_json(&input)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
    println!("[/] Test passed: missing and unknown fields are rejected.");
}

#[tokio::test]
async fn test_list_users_flow() {
    println!("\n\n[+] Running test: test_list_users_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("Steven something", "steven@gmail.com").await.unwrap();
    client.create_test_user("Chuck Norris", "chuck@gmail.com").await.unwrap();

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<UserRes> = test::read_body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "Steven something");
    assert_eq!(users[1].email, "chuck@gmail.com");
    println!("[/] Test passed: both users listed.");
}

#[tokio::test]
async fn test_get_user_flow() {
    println!("\n\n[+] Running test: test_get_user_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, _) = client.create_test_user("Pet", "pet@email.com").await.unwrap();

    let req = test::TestRequest::get().uri(&format!("/users/{}", user_id)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "Pet");
    assert_eq!(body["email"], "pet@email.com");
    assert!(body.get("password").is_none());

    println!("[>] Requesting /users/unknown");
    let req = test::TestRequest::get().uri("/users/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Requesting /users/+{}", user_id);
    let req = test::TestRequest::get().uri(&format!("/users/+{}", user_id)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Requesting an id that does not exist");
    let req = test::TestRequest::get().uri(&format!("/users/{}", user_id + 100)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: lookup by id.");
}
