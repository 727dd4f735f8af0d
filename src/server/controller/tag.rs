use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        book::BookDetailDto,
        tag::{AddTagsDto, TagDto, TagNameDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, MEMBERS},
        model::tag::{validate_tag_name, Tag},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags, newest first", body = Vec<TagDto>),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let tags = TagService::new(&state.db).get_all().await?;

    Ok(Json(tags.into_iter().map(Tag::into_dto).collect::<Vec<_>>()))
}

/// Create a tag. Names are trimmed and must be 1 to 50 characters.
#[utoipa::path(
    post,
    path = "/api/v1/tags",
    tag = TAG_TAG,
    request_body = TagNameDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Tag exists", body = ErrorDto),
        (status = 422, description = "Invalid tag name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TagNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let name = validate_tag_name(payload.name)?;
    let tag = TagService::new(&state.db).create(name).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Attach tags to a book by name.
///
/// Tags that do not exist yet are created. Tags already on the book are skipped.
#[utoipa::path(
    post,
    path = "/api/v1/books/{uid}/tags",
    tag = TAG_TAG,
    params(("uid" = Uuid, Path, description = "Book ID")),
    request_body = AddTagsDto,
    responses(
        (status = 200, description = "Book with its updated tags", body = BookDetailDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 422, description = "Invalid tag name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_tags_to_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<AddTagsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let names = payload
        .tags
        .into_iter()
        .map(|tag| validate_tag_name(tag.name))
        .collect::<Result<Vec<_>, _>>()?;

    let detail = TagService::new(&state.db).add_to_book(uid, names).await?;

    Ok(Json(detail.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/v1/tags/{uid}",
    tag = TAG_TAG,
    params(("uid" = Uuid, Path, description = "Tag ID")),
    request_body = TagNameDto,
    responses(
        (status = 200, description = "Renamed tag", body = TagDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Another tag has that name", body = ErrorDto),
        (status = 422, description = "Invalid tag name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rename_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<TagNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let name = validate_tag_name(payload.name)?;
    let tag = TagService::new(&state.db).rename(uid, name).await?;

    Ok(Json(tag.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{uid}",
    tag = TAG_TAG,
    params(("uid" = Uuid, Path, description = "Tag ID")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    TagService::new(&state.db).delete(uid).await?;

    Ok(StatusCode::NO_CONTENT)
}
