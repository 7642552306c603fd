use super::auth::{AdminUser, CurrentUser};
use super::users;
use crate::domain::dto::{
    LoginRequest, LoginResponse, RegisterUserRequest, SearchQuery, UpdateUserRequest,
    UserResponse,
};
use crate::error::UserError;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use lcomp_derive::api_handler;
use lcomp_kernel::domain::account::Role;
use lcomp_kernel::domain::constants::{AUTH_TAG, USERS_TAG};
use lcomp_kernel::server::{ApiError, ApiState, ErrorBody, ValidatedJson};

const TOKEN_TYPE: &str = "Bearer";

/// Runs CPU-bound account work (password hashing) off the async workers.
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, UserError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::internal(format!("Worker task failed: {e}")))?
        .map_err(ApiError::from)
}

fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse::<Role>().map_err(|e| ApiError::bad_request(e.to_string()))
}

fn as_bad_request(err: ApiError) -> ApiError {
    err.with_status(StatusCode::BAD_REQUEST)
}

fn as_not_found(err: ApiError) -> ApiError {
    err.with_status(StatusCode::NOT_FOUND)
}

#[api_handler(
    post,
    path = "/api/users/register",
    request_body = RegisterUserRequest,
    responses(
        (status = CREATED, description = "Account created", body = UserResponse),
        (status = BAD_REQUEST, description = "Invalid body, or username/e-mail taken", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
pub(super) async fn register(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let service = users(&state)?.service.clone();
    let user = blocking(move || service.register(request)).await.map_err(as_bad_request)?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[api_handler(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Signed in", body = LoginResponse),
        (status = BAD_REQUEST, description = "Malformed body", body = ErrorBody),
        (status = UNAUTHORIZED, description = "Bad credentials or inactive account", body = ErrorBody),
    ),
    tag = AUTH_TAG,
)]
pub(super) async fn login(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let slice = users(&state)?;
    let service = slice.service.clone();
    let user =
        blocking(move || service.authenticate(&request.identifier, &request.password)).await?;

    let access_token = slice.tokens.issue(user.id.to_string(), user.role)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: TOKEN_TYPE.to_owned(),
        expires_in: slice.tokens.ttl_seconds(),
        user: user.into(),
    }))
}

#[api_handler(
    get,
    path = "/api/users",
    responses(
        (status = OK, description = "Every account in id order", body = [UserResponse]),
        (status = UNAUTHORIZED, body = ErrorBody),
        (status = FORBIDDEN, body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn list_users(
    State(state): State<ApiState>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(users(&state)?.service.get_all()))
}

#[api_handler(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = OK, body = UserResponse),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn get_user(
    State(state): State<ApiState>,
    _caller: CurrentUser,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users(&state)?.service.get_by_id(id).map_err(|e| as_not_found(e.into()))?;
    Ok(Json(user))
}

#[api_handler(
    put,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = OK, body = UserResponse),
        (status = BAD_REQUEST, description = "Invalid body, unknown id, or username/e-mail taken", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn update_user(
    State(state): State<ApiState>,
    _caller: CurrentUser,
    Path(id): Path<u64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users(&state)?.service.update(id, request).map_err(|e| as_bad_request(e.into()))?;
    Ok(Json(user))
}

#[api_handler(
    delete,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = NO_CONTENT, description = "Account removed"),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn delete_user(
    State(state): State<ApiState>,
    _admin: AdminUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    users(&state)?.service.delete(id).map_err(|e| as_not_found(e.into()))?;
    Ok(StatusCode::NO_CONTENT)
}

#[api_handler(
    patch,
    path = "/api/users/{id}/toggle-status",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = OK, description = "Account with the flipped enabled flag", body = UserResponse),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn toggle_status(
    State(state): State<ApiState>,
    _admin: AdminUser,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users(&state)?.service.toggle_status(id).map_err(|e| as_not_found(e.into()))?;
    Ok(Json(user))
}

#[api_handler(
    get,
    path = "/api/users/username/{username}",
    params(("username" = String, Path)),
    responses(
        (status = OK, body = UserResponse),
        (status = NOT_FOUND, body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn get_by_username(
    State(state): State<ApiState>,
    _caller: CurrentUser,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user =
        users(&state)?.service.get_by_username(&username).map_err(|e| as_not_found(e.into()))?;
    Ok(Json(user))
}

#[api_handler(
    get,
    path = "/api/users/role/{role}",
    params(("role" = String, Path, description = "USER, ADMIN or MODERATOR")),
    responses(
        (status = OK, body = [UserResponse]),
        (status = BAD_REQUEST, description = "Unknown role", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn by_role(
    State(state): State<ApiState>,
    _admin: AdminUser,
    Path(role): Path<String>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let role = parse_role(&role)?;
    Ok(Json(users(&state)?.service.get_by_role(role)))
}

#[api_handler(
    get,
    path = "/api/users/check-username/{username}",
    params(("username" = String, Path)),
    responses((status = OK, description = "Whether the username is taken", body = bool)),
    tag = USERS_TAG,
)]
pub(super) async fn check_username(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Result<Json<bool>, ApiError> {
    Ok(Json(users(&state)?.service.username_exists(&username)))
}

#[api_handler(
    get,
    path = "/api/users/check-email/{email}",
    params(("email" = String, Path)),
    responses((status = OK, description = "Whether the e-mail is taken", body = bool)),
    tag = USERS_TAG,
)]
pub(super) async fn check_email(
    State(state): State<ApiState>,
    Path(email): Path<String>,
) -> Result<Json<bool>, ApiError> {
    Ok(Json(users(&state)?.service.email_exists(&email)))
}

#[api_handler(
    get,
    path = "/api/users/count/enabled",
    responses((status = OK, description = "Number of enabled accounts", body = u64)),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn count_enabled(
    State(state): State<ApiState>,
    _admin: AdminUser,
) -> Result<Json<u64>, ApiError> {
    Ok(Json(users(&state)?.service.enabled_count()))
}

#[api_handler(
    get,
    path = "/api/users/count/role/{role}",
    params(("role" = String, Path, description = "USER, ADMIN or MODERATOR")),
    responses(
        (status = OK, description = "Number of accounts holding the role", body = u64),
        (status = BAD_REQUEST, description = "Unknown role", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn count_by_role(
    State(state): State<ApiState>,
    _admin: AdminUser,
    Path(role): Path<String>,
) -> Result<Json<u64>, ApiError> {
    let role = parse_role(&role)?;
    Ok(Json(users(&state)?.service.count_by_role(role)))
}

#[api_handler(
    get,
    path = "/api/users/enabled",
    responses((status = OK, body = [UserResponse])),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn enabled_users(
    State(state): State<ApiState>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(users(&state)?.service.get_enabled()))
}

#[api_handler(
    get,
    path = "/api/users/search",
    params(SearchQuery),
    responses((status = OK, body = [UserResponse])),
    security(("bearer" = [])),
    tag = USERS_TAG,
)]
pub(super) async fn search(
    State(state): State<ApiState>,
    _admin: AdminUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let found =
        users(&state)?.service.search(query.first_name.as_deref(), query.last_name.as_deref());
    Ok(Json(found))
}
