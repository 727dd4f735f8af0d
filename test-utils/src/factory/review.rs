//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_uid: Uuid,
    book_uid: Uuid,
    rating: i32,
    review_text: String,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory for the given author and book.
    ///
    /// Defaults: rating 4, review_text `"A solid read."`.
    pub fn new(db: &'a DatabaseConnection, user_uid: Uuid, book_uid: Uuid) -> Self {
        Self {
            db,
            user_uid,
            book_uid,
            rating: 4,
            review_text: "A solid read.".to_string(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn review_text(mut self, review_text: impl Into<String>) -> Self {
        self.review_text = review_text.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            rating: ActiveValue::Set(self.rating),
            review_text: ActiveValue::Set(self.review_text),
            user_uid: ActiveValue::Set(self.user_uid),
            book_uid: ActiveValue::Set(self.book_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    user_uid: Uuid,
    book_uid: Uuid,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_uid, book_uid).build().await
}
