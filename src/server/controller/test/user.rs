use super::*;

async fn account_app() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let app = app(&test);
    (test, app)
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "password1"
    })
}

/// Tests creating a user and reading it back by id and email.
///
/// Expected: 201 without password, then 200 for both lookups
#[tokio::test]
async fn creates_and_reads_user() {
    let (_test, app) = account_app().await;

    let (status, body) = send(app.clone(), Method::POST, "/api/users", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"].get("password").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = get(app.clone(), &format!("/api/users/id/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Alice");

    let (status, body) = get(app, "/api/users/email?email=alice@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"].as_i64().unwrap(), id);
}

/// Tests that duplicate emails conflict.
///
/// Expected: 409 CONFLICT
#[tokio::test]
async fn duplicate_email_conflicts() {
    let (_test, app) = account_app().await;

    send(app.clone(), Method::POST, "/api/users", Some(alice())).await;
    let (status, body) = send(app, Method::POST, "/api/users", Some(alice())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

/// Tests payload validation on create.
///
/// Expected: 400 listing each invalid field
#[tokio::test]
async fn invalid_payload_is_rejected() {
    let (_test, app) = account_app().await;

    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "A", "email": "nope", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().unwrap().len(), 3);
}

/// Tests login with right and wrong passwords.
///
/// Expected: 401 for the wrong password, 200 with lastLoginAt for the right one
#[tokio::test]
async fn login_checks_password() {
    let (_test, app) = account_app().await;

    send(app.clone(), Method::POST, "/api/users", Some(alice())).await;

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "alice@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "INVALID_CREDENTIALS");

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "ghost@example.com", "password": "password1" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = send(
        app,
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "alice@example.com", "password": "password1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["lastLoginAt"].is_null());
}

/// Tests update and delete of an existing user, and 404s afterwards.
///
/// Expected: 200 on update and delete, 404 once deleted
#[tokio::test]
async fn updates_and_deletes_user() {
    let (test, app) = account_app().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let uri = format!("/api/users/{}", user.id);

    let (status, body) = send(
        app.clone(),
        Method::PUT,
        &uri,
        Some(json!({ "name": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Renamed");

    let (status, _) = send(app.clone(), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app.clone(), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, &format!("/api/users/id/{}", user.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that an update without fields is rejected.
///
/// Expected: 400
#[tokio::test]
async fn empty_update_is_rejected() {
    let (test, app) = account_app().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();

    let (status, _) = send(
        app,
        Method::PUT,
        &format!("/api/users/{}", user.id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
