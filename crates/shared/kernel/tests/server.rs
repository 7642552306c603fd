#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use lcomp_kernel::domain::config::ApiConfig;
use lcomp_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use lcomp_kernel::security::SecurityError;
use lcomp_kernel::server::router::system_router;
use lcomp_kernel::server::{ApiError, ApiState, ApiStateError, ErrorBody, ValidatedJson, bearer_token};
use serde::Deserialize;
use std::any::Any;
use tower::ServiceExt;
use validator::Validate;

#[derive(Debug)]
struct Probe(u8);

impl FeatureSlice for Probe {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
struct Greeting {
    #[validate(length(min = 3))]
    name: String,
}

async fn greet(ValidatedJson(greeting): ValidatedJson<Greeting>) -> String {
    format!("hello {}", greeting.name)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::post("/greet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[test]
fn state_requires_config_and_finds_slices() {
    assert!(matches!(ApiState::builder().build(), Err(ApiStateError::Validation { .. })));

    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Probe(7)))
        .build()
        .unwrap();

    assert_eq!(state.get_slice::<Probe>().map(|p| p.0), Some(7));
    assert_eq!(state.slice_ids().count(), 1);
    assert_eq!(state.config.server.port, 4583);
}

#[test]
fn missing_slice_names_the_type() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let err = state.try_get_slice::<Probe>().unwrap_err();
    assert!(err.to_string().contains("Probe"));
}

#[tokio::test]
async fn errors_render_code_and_message() {
    let response = ApiError::not_found("User not found with id: 9").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.code, "NOT_FOUND");
    assert_eq!(body.message, "User not found with id: 9");
}

#[test]
fn token_errors_become_unauthorized() {
    let issuer = lcomp_kernel::security::token::TokenIssuer::new(
        lcomp_kernel::domain::config::JwtConfig {
            secret: "server-test-secret".to_owned(),
            ..Default::default()
        },
    )
    .unwrap();
    let err: SecurityError = issuer.verify("junk").unwrap_err();
    assert_eq!(ApiError::from(err).status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn validated_json_accepts_valid_bodies() {
    let app = Router::new().route("/greet", post(greet));
    let response = app.oneshot(post_json(r#"{"name":"Ada"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"hello Ada");
}

#[tokio::test]
async fn validated_json_rejects_rule_violations_and_bad_json() {
    let app = Router::new().route("/greet", post(greet));

    let short = app.clone().oneshot(post_json(r#"{"name":"Al"}"#)).await.unwrap();
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(short).await;
    assert_eq!(body.code, "BAD_REQUEST");
    assert!(body.message.contains("name"));

    let broken = app.oneshot(post_json("{not json")).await.unwrap();
    assert_eq!(broken.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn bearer_token_parsing() {
    let (parts, ()) = Request::get("/").header(header::AUTHORIZATION, "Bearer abc.def").body(()).unwrap().into_parts();
    assert_eq!(bearer_token(&parts).unwrap(), "abc.def");

    let (parts, ()) = Request::get("/").header(header::AUTHORIZATION, "Basic Zm9v").body(()).unwrap().into_parts();
    assert_eq!(bearer_token(&parts).unwrap_err().status(), StatusCode::UNAUTHORIZED);

    let (parts, ()) = Request::get("/").body(()).unwrap().into_parts();
    assert!(bearer_token(&parts).is_err());
}

#[tokio::test]
async fn health_route_reports_up_without_caching() {
    let (router, _api) = system_router::<()>().split_for_parts();
    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["status"], "up");
}
