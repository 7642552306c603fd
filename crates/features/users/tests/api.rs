#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use lcomp_kernel::domain::config::{AdminAccount, ApiConfig};
use lcomp_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN: (&str, &str) = ("root", "rootpass");

fn app() -> Router {
    let mut config = ApiConfig::default();
    config.security.jwt.secret = "users-api-test-secret".to_owned();
    config.security.admin = Some(AdminAccount {
        username: ADMIN.0.to_owned(),
        email: "root@example.com".to_owned(),
        password: ADMIN.1.to_owned(),
    });

    let slice = lcomp_users::init(&config).expect("users slice");
    let state = ApiState::builder().config(config).register_slice(slice).build().expect("state");
    let (router, _api): (Router, _) =
        lcomp_users::server::router().with_state(state).split_for_parts();
    router
}

async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &Router, username: &str) -> Value {
    let response = call(
        app,
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
            "firstName": "Test",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

async fn login(app: &Router, identifier: &str, password: &str) -> String {
    let response = call(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "identifier": identifier, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["accessToken"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn registration_returns_camel_case_user() {
    let app = app();
    let user = register(&app, "alice").await;

    assert_eq!(user["id"], 2);
    assert_eq!(user["username"], "alice");
    assert_eq!(user["firstName"], "Test");
    assert_eq!(user["lastName"], Value::Null);
    assert_eq!(user["role"], "USER");
    assert_eq!(user["isEnabled"], true);
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn registration_failures_are_bad_requests() {
    let app = app();
    register(&app, "alice").await;

    let duplicate = call(
        &app,
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({ "username": "alice", "email": "new@example.com", "password": "password123" })),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    let body = json_body(duplicate).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Username already exists: alice");

    let invalid = call(
        &app,
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({ "username": "al", "email": "nope", "password": "123" })),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_issues_bearer_tokens() {
    let app = app();
    register(&app, "alice").await;

    let response = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "identifier": "alice@example.com", "password": "password123" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["lastLogin"].is_string());

    let wrong = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "identifier": "alice", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_require_the_admin_role() {
    let app = app();
    register(&app, "alice").await;
    let user_token = login(&app, "alice", "password123").await;
    let admin_token = login(&app, ADMIN.0, ADMIN.1).await;

    let anonymous = call(&app, Method::GET, "/api/users", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let forged = call(&app, Method::GET, "/api/users", Some("not-a-token"), None).await;
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);

    let plain_user = call(&app, Method::GET, "/api/users", Some(&user_token), None).await;
    assert_eq!(plain_user.status(), StatusCode::FORBIDDEN);

    let admin = call(&app, Method::GET, "/api/users", Some(&admin_token), None).await;
    assert_eq!(admin.status(), StatusCode::OK);
    assert_eq!(json_body(admin).await.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn lookups_need_a_token_and_map_missing_to_404() {
    let app = app();
    let alice = register(&app, "alice").await;
    let token = login(&app, "alice", "password123").await;

    let own = call(&app, Method::GET, &format!("/api/users/{}", alice["id"]), Some(&token), None).await;
    assert_eq!(own.status(), StatusCode::OK);

    let by_name = call(&app, Method::GET, "/api/users/username/root", Some(&token), None).await;
    assert_eq!(json_body(by_name).await["role"], "ADMIN");

    let missing = call(&app, Method::GET, "/api/users/404", Some(&token), None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let missing_name = call(&app, Method::GET, "/api/users/username/ghost", Some(&token), None).await;
    assert_eq!(missing_name.status(), StatusCode::NOT_FOUND);

    let anonymous = call(&app, Method::GET, "/api/users/1", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_maps_every_failure_to_400() {
    let app = app();
    register(&app, "alice").await;
    register(&app, "bob").await;
    let token = login(&app, "alice", "password123").await;

    let ok = call(&app, Method::PUT, "/api/users/2", Some(&token), Some(json!({ "lastName": "Liddell" }))).await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(json_body(ok).await["lastName"], "Liddell");

    let blank = call(&app, Method::PUT, "/api/users/2", Some(&token), Some(json!({ "username": "", "email": "" }))).await;
    assert_eq!(blank.status(), StatusCode::OK);
    assert_eq!(json_body(blank).await["email"], "alice@example.com");

    let taken = call(&app, Method::PUT, "/api/users/2", Some(&token), Some(json!({ "username": "bob" }))).await;
    assert_eq!(taken.status(), StatusCode::BAD_REQUEST);

    let unknown = call(&app, Method::PUT, "/api/users/99", Some(&token), Some(json!({}))).await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_or_disabling_revokes_tokens() {
    let app = app();
    register(&app, "alice").await;
    register(&app, "bob").await;
    let admin = login(&app, ADMIN.0, ADMIN.1).await;
    let alice = login(&app, "alice", "password123").await;
    let bob = login(&app, "bob", "password123").await;

    let toggled = call(&app, Method::PATCH, "/api/users/2/toggle-status", Some(&admin), None).await;
    assert_eq!(toggled.status(), StatusCode::OK);
    assert_eq!(json_body(toggled).await["isEnabled"], false);
    let after_disable = call(&app, Method::GET, "/api/users/1", Some(&alice), None).await;
    assert_eq!(after_disable.status(), StatusCode::UNAUTHORIZED);

    let deleted = call(&app, Method::DELETE, "/api/users/3", Some(&admin), None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let after_delete = call(&app, Method::GET, "/api/users/1", Some(&bob), None).await;
    assert_eq!(after_delete.status(), StatusCode::UNAUTHORIZED);

    let again = call(&app, Method::DELETE, "/api/users/3", Some(&admin), None).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let toggle_missing = call(&app, Method::PATCH, "/api/users/3/toggle-status", Some(&admin), None).await;
    assert_eq!(toggle_missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn availability_checks_are_public() {
    let app = app();
    register(&app, "alice").await;

    let taken = call(&app, Method::GET, "/api/users/check-username/alice", None, None).await;
    assert_eq!(json_body(taken).await, json!(true));

    let free = call(&app, Method::GET, "/api/users/check-email/free@example.com", None, None).await;
    assert_eq!(free.status(), StatusCode::OK);
    assert_eq!(json_body(free).await, json!(false));
}

#[tokio::test]
async fn role_counts_and_search_for_admins() {
    let app = app();
    register(&app, "alice").await;
    register(&app, "bob").await;
    let admin = login(&app, ADMIN.0, ADMIN.1).await;

    let admins = call(&app, Method::GET, "/api/users/role/ADMIN", Some(&admin), None).await;
    assert_eq!(json_body(admins).await.as_array().map(Vec::len), Some(1));

    let bad_role = call(&app, Method::GET, "/api/users/role/admin", Some(&admin), None).await;
    assert_eq!(bad_role.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(bad_role).await["message"], "Unknown role: admin");

    let users = call(&app, Method::GET, "/api/users/count/role/USER", Some(&admin), None).await;
    assert_eq!(json_body(users).await, json!(2));

    let enabled = call(&app, Method::GET, "/api/users/count/enabled", Some(&admin), None).await;
    assert_eq!(json_body(enabled).await, json!(3));

    let listed = call(&app, Method::GET, "/api/users/enabled", Some(&admin), None).await;
    assert_eq!(json_body(listed).await.as_array().map(Vec::len), Some(3));

    let found = call(&app, Method::GET, "/api/users/search?firstName=tes", Some(&admin), None).await;
    assert_eq!(json_body(found).await.as_array().map(Vec::len), Some(2));
}
