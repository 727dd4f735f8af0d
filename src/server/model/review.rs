//! Review domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::{
        api::LimitOffsetParams,
        review::{CreateReviewDto, ReviewDto, ReviewStatsDto, UpdateReviewDto},
    },
    server::{error::AppError, util::validate},
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const MAX_REVIEW_TEXT: usize = 2000;
/// Upper bound on `limit` for review listings.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub uid: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub user_uid: Uuid,
    pub book_uid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            uid: entity.uid,
            rating: entity.rating,
            review_text: entity.review_text,
            user_uid: entity.user_uid,
            book_uid: entity.book_uid,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            uid: self.uid,
            rating: self.rating,
            review_text: self.review_text,
            user_uid: self.user_uid,
            book_uid: self.book_uid,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Limit/offset window over a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPage {
    pub limit: u64,
    pub offset: u64,
}

impl ReviewPage {
    /// Builds a window, capping `limit` at [`MAX_PAGE_SIZE`].
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: limit.min(MAX_PAGE_SIZE),
            offset,
        }
    }
}

impl ReviewPage {
    /// Builds a window from query parameters.
    ///
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - `offset` does not fit a database offset
    pub fn from_params(params: LimitOffsetParams) -> Result<Self, AppError> {
        Ok(Self::new(
            params.limit,
            validate::offset("offset", params.offset)?,
        ))
    }
}

impl Default for ReviewPage {
    fn default() -> Self {
        Self::new(MAX_PAGE_SIZE, 0)
    }
}

/// Validated new review for a book.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub user_uid: Uuid,
    pub book_uid: Uuid,
    pub rating: i32,
    pub review_text: String,
}

impl CreateReviewParam {
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Rating outside 1..=5 or text empty or
    ///   longer than 2000 characters after trimming
    pub fn from_dto(user_uid: Uuid, book_uid: Uuid, dto: CreateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            user_uid,
            book_uid,
            rating: validate::range("rating", dto.rating, MIN_RATING, MAX_RATING)?,
            review_text: validate::length("review_text", dto.review_text, 1, MAX_REVIEW_TEXT)?,
        })
    }
}

/// Partial review update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParam {
    pub rating: Option<i32>,
    pub review_text: Option<String>,
}

impl UpdateReviewParam {
    pub fn from_dto(dto: UpdateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            rating: dto
                .rating
                .map(|r| validate::range("rating", r, MIN_RATING, MAX_RATING))
                .transpose()?,
            review_text: dto
                .review_text
                .map(|t| validate::length("review_text", t, 1, MAX_REVIEW_TEXT))
                .transpose()?,
        })
    }
}

/// Aggregate rating figures for one book.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub book_uid: Uuid,
    pub total_reviews: u64,
    /// Mean rating rounded to two decimals, `0.0` without reviews.
    pub average_rating: f64,
}

impl ReviewStats {
    /// Builds stats from a review count and the sum of their ratings.
    pub fn from_totals(book_uid: Uuid, total_reviews: u64, rating_sum: i64) -> Self {
        let average_rating = if total_reviews == 0 {
            0.0
        } else {
            let mean = rating_sum as f64 / total_reviews as f64;
            (mean * 100.0).round() / 100.0
        };

        Self {
            book_uid,
            total_reviews,
            average_rating,
        }
    }

    pub fn into_dto(self) -> ReviewStatsDto {
        ReviewStatsDto {
            book_uid: self.book_uid,
            total_reviews: self.total_reviews,
            average_rating: self.average_rating,
        }
    }
}
