//! Review service for business logic.
//!
//! Enforces one review per user per book, author-only modification, and computes
//! per-book rating statistics.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository},
    error::AppError,
    model::{
        review::{CreateReviewParam, Review, ReviewPage, ReviewStats, UpdateReviewParam},
        user::User,
    },
};

fn review_not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}

pub struct ReviewService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a window over every review, newest first.
    pub async fn get_all(&self, page: ReviewPage) -> Result<Vec<Review>, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        Ok(review_repo.get_page(page).await?)
    }

    pub async fn get(&self, uid: Uuid) -> Result<Review, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        review_repo.find_by_uid(uid).await?.ok_or_else(review_not_found)
    }

    /// Gets a window over the reviews of a book.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No book with that uid
    pub async fn get_for_book(
        &self,
        book_uid: Uuid,
        page: ReviewPage,
    ) -> Result<Vec<Review>, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        self.ensure_book_exists(book_uid).await?;

        Ok(review_repo.get_page_by_book(book_uid, page).await?)
    }

    pub async fn get_for_user(
        &self,
        user_uid: Uuid,
        page: ReviewPage,
    ) -> Result<Vec<Review>, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        Ok(review_repo.get_page_by_user(user_uid, page).await?)
    }

    /// Computes the review count and average rating of a book.
    ///
    /// # Returns
    /// - `Ok(ReviewStats)` - Average rounded to two decimals, 0.0 without reviews
    /// - `Err(AppError::NotFound)` - No book with that uid
    pub async fn get_stats(&self, book_uid: Uuid) -> Result<ReviewStats, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        self.ensure_book_exists(book_uid).await?;

        let (total, rating_sum) = review_repo.get_rating_totals(book_uid).await?;

        Ok(ReviewStats::from_totals(book_uid, total, rating_sum))
    }

    /// Adds a review to a book.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::NotFound)` - No book with that uid
    /// - `Err(AppError::Conflict)` - The user already reviewed this book
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        self.ensure_book_exists(param.book_uid).await?;

        if review_repo
            .find_by_user_and_book(param.user_uid, param.book_uid)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You have already reviewed this book".to_string(),
            ));
        }

        let review = review_repo.create(param).await?;

        tracing::info!(
            "Review {} created for book {} by {}",
            review.uid,
            review.book_uid,
            review.user_uid
        );

        Ok(review)
    }

    /// Applies a partial update to a review written by `actor`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No review with that uid
    /// - `Err(AppError::Forbidden)` - `actor` did not write the review
    pub async fn update(
        &self,
        actor: &User,
        uid: Uuid,
        param: UpdateReviewParam,
    ) -> Result<Review, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        self.ensure_author(actor, uid).await?;

        let review = review_repo
            .update(uid, param)
            .await?
            .ok_or_else(review_not_found)?;

        tracing::info!("Review {} updated by {}", uid, actor.uid);

        Ok(review)
    }

    /// Deletes a review written by `actor`.
    pub async fn delete(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let review_repo = ReviewRepository::new(self.db);

        self.ensure_author(actor, uid).await?;

        if !review_repo.delete(uid).await? {
            return Err(review_not_found());
        }

        tracing::info!("Review {} deleted by {}", uid, actor.uid);

        Ok(())
    }

    async fn ensure_book_exists(&self, book_uid: Uuid) -> Result<(), AppError> {
        let book_repo = BookRepository::new(self.db);

        if book_repo.find_by_uid(book_uid).await?.is_none() {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }

    async fn ensure_author(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let review = self.get(uid).await?;

        if review.user_uid != actor.uid {
            return Err(AppError::Forbidden(
                "You can only modify your own reviews".to_string(),
            ));
        }

        Ok(())
    }
}
