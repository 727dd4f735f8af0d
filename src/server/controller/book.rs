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
        book::{BookDetailDto, BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, MEMBERS},
        model::book::{Book, CreateBookParam, UpdateBookParam},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Get every book, newest first.
///
/// Any signed-in user may list books regardless of role.
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "All books", body = Vec<BookDto>),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_books(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .authenticate()
        .await?;

    let books = BookService::new(&state.db).get_all().await?;

    Ok(Json(books.into_iter().map(Book::into_dto).collect::<Vec<_>>()))
}

/// Create a book owned by the current user.
///
/// # Returns
/// - `201 Created` - The created book
/// - `422 Unprocessable Entity` - Blank fields, negative page count, or a
///   `published_date` that is not `YYYY-MM-DD`
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = CreateBookParam::from_dto(user.uid, payload)?;
    let book = BookService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

/// Get a book with its reviews and tags.
#[utoipa::path(
    get,
    path = "/api/v1/books/{uid}",
    tag = BOOK_TAG,
    params(("uid" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book detail", body = BookDetailDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let detail = BookService::new(&state.db).get_detail(uid).await?;

    Ok(Json(detail.into_dto()))
}

/// Partially update a book.
///
/// # Access Control
/// - The book's owner or an admin
#[utoipa::path(
    patch,
    path = "/api/v1/books/{uid}",
    tag = BOOK_TAG,
    params(("uid" = Uuid, Path, description = "Book ID")),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Updated book", body = BookDto),
        (status = 403, description = "Not authenticated or not the owner", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 422, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = UpdateBookParam::from_dto(payload)?;
    let book = BookService::new(&state.db).update(&user, uid, param).await?;

    Ok(Json(book.into_dto()))
}

/// Delete a book with its reviews and tag links.
///
/// # Access Control
/// - The book's owner or an admin
#[utoipa::path(
    delete,
    path = "/api/v1/books/{uid}",
    tag = BOOK_TAG,
    params(("uid" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 403, description = "Not authenticated or not the owner", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    BookService::new(&state.db).delete(&user, uid).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the books owned by a user, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/books/user/{user_uid}",
    tag = BOOK_TAG,
    params(("user_uid" = Uuid, Path, description = "Owner's user ID")),
    responses(
        (status = 200, description = "Books owned by the user", body = Vec<BookDto>),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_books(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let books = BookService::new(&state.db).get_by_user(user_uid).await?;

    Ok(Json(books.into_iter().map(Book::into_dto).collect::<Vec<_>>()))
}
