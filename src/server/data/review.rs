//! Review data repository for database operations.
//!
//! Listings are ordered newest first and windowed with limit/offset.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::review::{CreateReviewParam, Review, ReviewPage, UpdateReviewParam};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let now = Utc::now();
        let entity = entity::review::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            rating: ActiveValue::Set(param.rating),
            review_text: ActiveValue::Set(param.review_text),
            user_uid: ActiveValue::Set(param.user_uid),
            book_uid: ActiveValue::Set(param.book_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(uid).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Finds the review `user_uid` wrote for `book_uid`, if any.
    pub async fn find_by_user_and_book(
        &self,
        user_uid: Uuid,
        book_uid: Uuid,
    ) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find()
            .filter(entity::review::Column::UserUid.eq(user_uid))
            .filter(entity::review::Column::BookUid.eq(book_uid))
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets a window over all reviews.
    pub async fn get_page(&self, page: ReviewPage) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets a window over the reviews of one book.
    pub async fn get_page_by_book(
        &self,
        book_uid: Uuid,
        page: ReviewPage,
    ) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::BookUid.eq(book_uid))
            .order_by_desc(entity::review::Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets a window over the reviews written by one user.
    pub async fn get_page_by_user(
        &self,
        user_uid: Uuid,
        page: ReviewPage,
    ) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::UserUid.eq(user_uid))
            .order_by_desc(entity::review::Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets every review of one book, newest first.
    pub async fn get_by_book(&self, book_uid: Uuid) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::BookUid.eq(book_uid))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets every review written by one user, newest first.
    pub async fn get_by_user(&self, user_uid: Uuid) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::UserUid.eq(user_uid))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Counts a book's reviews and sums their ratings in a single aggregate query.
    ///
    /// # Returns
    /// - `Ok((count, rating_sum))` - `(0, 0)` when the book has no reviews
    pub async fn get_rating_totals(&self, book_uid: Uuid) -> Result<(u64, i64), DbErr> {
        let totals = entity::prelude::Review::find()
            .select_only()
            .column_as(entity::review::Column::Uid.count(), "total")
            .column_as(entity::review::Column::Rating.sum(), "rating_sum")
            .filter(entity::review::Column::BookUid.eq(book_uid))
            .into_tuple::<(i64, Option<i64>)>()
            .one(self.db)
            .await?;

        Ok(match totals {
            Some((total, rating_sum)) => (total.max(0) as u64, rating_sum.unwrap_or(0)),
            None => (0, 0),
        })
    }

    /// Applies a partial update to a review.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Updated review
    /// - `Ok(None)` - No review with that uid
    pub async fn update(
        &self,
        uid: Uuid,
        param: UpdateReviewParam,
    ) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = entity.into();
        if let Some(rating) = param.rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(review_text) = param.review_text {
            active.review_text = ActiveValue::Set(review_text);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Review::from_entity(entity)))
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No review with that uid
    pub async fn delete(&self, uid: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
