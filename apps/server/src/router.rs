use axum::Router;
use axum::response::Html;
use axum::routing::get;
use lcomp::kernel::prelude::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "Login Components API", description = "User accounts and bearer-token login"),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

/// Declares the `bearer` scheme referenced by protected operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build(),
            ),
        );
    }
}

async fn landing() -> Html<String> {
    Html(lcomp::features::landing::render_document())
}

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .route("/", get(landing))
        .merge(lcomp::server::router::system_router())
        .merge(lcomp::server::router::users_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use lcomp::domain::config::ApiConfig;
    use tower::ServiceExt;

    fn app() -> Router {
        let mut cfg = ApiConfig::default();
        cfg.security.jwt.secret = "router-test-secret".to_owned();
        let slices = lcomp::init(&cfg).unwrap();
        init(ApiState::builder().config(cfg).register_slices(slices).build().unwrap())
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response =
            app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_serves_the_landing_document() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("<title>Login Components</title>"));
        assert!(body.contains("Welcome to Login Components"));
    }

    #[tokio::test]
    async fn health_and_reference_are_served() {
        let (status, body) = get_text(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\""));

        let (status, _) = get_text(app(), "/api").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn user_routes_are_mounted() {
        let (status, body) = get_text(app(), "/api/users/check-username/nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "false");

        let (status, _) = get_text(app(), "/api/users").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn document_declares_bearer_scheme_and_paths() {
        let (_, api) = OpenApiRouter::<ApiState>::with_openapi(ApiDoc::openapi())
            .merge(lcomp::server::router::users_router())
            .split_for_parts();

        let components = api.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer"));
        assert!(api.paths.paths.contains_key("/api/auth/login"));
        assert!(api.paths.paths.contains_key("/api/users/{id}"));
    }
}
