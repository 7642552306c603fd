use super::handlers;
use lcomp_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/api/users/*` and `/api/auth/login`.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::login))
        .routes(routes!(handlers::register))
        .routes(routes!(handlers::list_users))
        .routes(routes!(handlers::get_user, handlers::update_user, handlers::delete_user))
        .routes(routes!(handlers::toggle_status))
        .routes(routes!(handlers::get_by_username))
        .routes(routes!(handlers::by_role))
        .routes(routes!(handlers::check_username))
        .routes(routes!(handlers::check_email))
        .routes(routes!(handlers::count_enabled))
        .routes(routes!(handlers::count_by_role))
        .routes(routes!(handlers::enabled_users))
        .routes(routes!(handlers::search))
}
