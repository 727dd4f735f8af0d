//! Book domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    model::book::{BookDetailDto, BookDto, CreateBookDto, UpdateBookDto},
    server::{
        error::AppError,
        model::{review::Review, tag::Tag},
        util::validate,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub uid: Uuid,
    /// Owning user. Cleared when the owner account is deleted.
    pub user_uid: Option<Uuid>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: NaiveDate,
    pub page_count: i32,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            uid: entity.uid,
            user_uid: entity.user_uid,
            title: entity.title,
            author: entity.author,
            publisher: entity.publisher,
            published_date: entity.published_date,
            page_count: entity.page_count,
            language: entity.language,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            uid: self.uid,
            user_uid: self.user_uid,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            published_date: self.published_date,
            page_count: self.page_count,
            language: self.language,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Book together with its reviews and tags.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub reviews: Vec<Review>,
    pub tags: Vec<Tag>,
}

impl BookDetail {
    pub fn into_dto(self) -> BookDetailDto {
        BookDetailDto {
            book: self.book.into_dto(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

fn parse_published_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Unprocessable("published_date must be formatted as YYYY-MM-DD".to_string())
    })
}

/// Validated book creation parameters.
#[derive(Debug, Clone)]
pub struct CreateBookParam {
    pub user_uid: Uuid,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: NaiveDate,
    pub page_count: i32,
    pub language: String,
}

impl CreateBookParam {
    /// Validates the DTO for a book owned by `user_uid`.
    ///
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Empty text field, negative page count, or a
    ///   `published_date` that is not `YYYY-MM-DD`
    pub fn from_dto(user_uid: Uuid, dto: CreateBookDto) -> Result<Self, AppError> {
        let published_date = parse_published_date(&dto.published_date)?;

        Ok(Self {
            user_uid,
            title: validate::required("title", dto.title)?,
            author: validate::required("author", dto.author)?,
            publisher: validate::required("publisher", dto.publisher)?,
            published_date,
            page_count: validate::range("page_count", dto.page_count, 0, i32::MAX)?,
            language: validate::required("language", dto.language)?,
        })
    }
}

/// Partial book update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookParam {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub page_count: Option<i32>,
    pub language: Option<String>,
}

impl UpdateBookParam {
    pub fn from_dto(dto: UpdateBookDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.map(|v| validate::required("title", v)).transpose()?,
            author: dto.author.map(|v| validate::required("author", v)).transpose()?,
            publisher: dto
                .publisher
                .map(|v| validate::required("publisher", v))
                .transpose()?,
            published_date: dto
                .published_date
                .as_deref()
                .map(parse_published_date)
                .transpose()?,
            page_count: dto
                .page_count
                .map(|v| validate::range("page_count", v, 0, i32::MAX))
                .transpose()?,
            language: dto
                .language
                .map(|v| validate::required("language", v))
                .transpose()?,
        })
    }
}
