use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{review::ReviewDto, tag::TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub uid: Uuid,
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

/// Book with its reviews and tags.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetailDto {
    #[serde(flatten)]
    pub book: BookDto,
    pub reviews: Vec<ReviewDto>,
    pub tags: Vec<TagDto>,
}

/// Book creation payload. `published_date` is a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub page_count: i32,
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub page_count: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
}
