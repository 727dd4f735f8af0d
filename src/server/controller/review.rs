use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, LimitOffsetParams},
        review::{CreateReviewDto, ReviewDto, ReviewStatsDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, ADMINS, MEMBERS},
        model::review::{CreateReviewParam, Review, ReviewPage, UpdateReviewParam},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

fn review_dtos(reviews: Vec<Review>) -> Vec<ReviewDto> {
    reviews.into_iter().map(Review::into_dto).collect()
}

/// Get every review, newest first. `limit` is capped at 100.
///
/// # Access Control
/// - `Admin` - Only admins can list all reviews
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    params(LimitOffsetParams),
    responses(
        (status = 200, description = "Reviews", body = Vec<ReviewDto>),
        (status = 403, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LimitOffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(ADMINS)
        .await?;

    let page = ReviewPage::from_params(params)?;
    let reviews = ReviewService::new(&state.db).get_all(page).await?;

    Ok(Json(review_dtos(reviews)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{uid}",
    tag = REVIEW_TAG,
    params(("uid" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review", body = ReviewDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let review = ReviewService::new(&state.db).get(uid).await?;

    Ok(Json(review.into_dto()))
}

/// Get the reviews of a book, newest first. Public.
#[utoipa::path(
    get,
    path = "/api/v1/reviews/book/{book_uid}",
    tag = REVIEW_TAG,
    params(
        ("book_uid" = Uuid, Path, description = "Book ID"),
        LimitOffsetParams
    ),
    responses(
        (status = 200, description = "Reviews of the book", body = Vec<ReviewDto>),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(book_uid): Path<Uuid>,
    Query(params): Query<LimitOffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = ReviewPage::from_params(params)?;
    let reviews = ReviewService::new(&state.db)
        .get_for_book(book_uid, page)
        .await?;

    Ok(Json(review_dtos(reviews)))
}

/// Get the review count and average rating of a book. Public.
#[utoipa::path(
    get,
    path = "/api/v1/reviews/book/{book_uid}/stats",
    tag = REVIEW_TAG,
    params(("book_uid" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Review statistics", body = ReviewStatsDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_review_stats(
    State(state): State<AppState>,
    Path(book_uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ReviewService::new(&state.db).get_stats(book_uid).await?;

    Ok(Json(stats.into_dto()))
}

/// Get the current user's reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/reviews/user/me",
    tag = REVIEW_TAG,
    params(LimitOffsetParams),
    responses(
        (status = 200, description = "Reviews written by the current user", body = Vec<ReviewDto>),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_my_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LimitOffsetParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let page = ReviewPage::from_params(params)?;
    let reviews = ReviewService::new(&state.db)
        .get_for_user(user.uid, page)
        .await?;

    Ok(Json(review_dtos(reviews)))
}

/// Review a book as the current user.
///
/// # Returns
/// - `201 Created` - The created review
/// - `404 Not Found` - Book does not exist
/// - `409 Conflict` - The user already reviewed this book
/// - `422 Unprocessable Entity` - Rating outside 1 to 5 or text not 1 to 2000 characters
#[utoipa::path(
    post,
    path = "/api/v1/reviews/book/{book_uid}",
    tag = REVIEW_TAG,
    params(("book_uid" = Uuid, Path, description = "Book ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 409, description = "Book already reviewed by this user", body = ErrorDto),
        (status = 422, description = "Invalid review data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(book_uid): Path<Uuid>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = CreateReviewParam::from_dto(user.uid, book_uid, payload)?;
    let review = ReviewService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Partially update one of the current user's reviews.
#[utoipa::path(
    patch,
    path = "/api/v1/reviews/{uid}",
    tag = REVIEW_TAG,
    params(("uid" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Updated review", body = ReviewDto),
        (status = 403, description = "Not authenticated or not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 422, description = "Invalid review data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = UpdateReviewParam::from_dto(payload)?;
    let review = ReviewService::new(&state.db).update(&user, uid, param).await?;

    Ok(Json(review.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{uid}",
    tag = REVIEW_TAG,
    params(("uid" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not authenticated or not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    ReviewService::new(&state.db).delete(&user, uid).await?;

    Ok(StatusCode::NO_CONTENT)
}
