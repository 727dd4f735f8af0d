use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        user::{PaginatedUsersDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, ADMINS},
        model::user::UpdateUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get paginated users ordered by username.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Users for the page with total and page count
/// - `403 Forbidden` - Not authenticated or not an admin
/// - `422 Unprocessable Entity` - `entries` outside 1 to 100
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 403, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 422, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(ADMINS)
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok(Json(users.into_dto()))
}

/// Change a user's role or verification flag.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/users/{uid}",
    tag = ADMIN_TAG,
    params(("uid" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 403, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(ADMINS)
        .await?;

    let param = UpdateUserParam::from_dto(payload)?;
    let user = UserService::new(&state.db).update_user(uid, param).await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user account.
///
/// An admin cannot delete their own account.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{uid}",
    tag = ADMIN_TAG,
    params(("uid" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Attempted to delete own account", body = ErrorDto),
        (status = 403, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(ADMINS)
        .await?;

    UserService::new(&state.db).delete_user(&admin, uid).await?;

    Ok(StatusCode::NO_CONTENT)
}
