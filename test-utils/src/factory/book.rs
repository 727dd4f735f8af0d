//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test books with customizable fields.
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    user_uid: Option<Uuid>,
    title: String,
    author: String,
    published_date: NaiveDate,
    page_count: i32,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory owned by `user_uid`.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - published_date: 2020-01-01
    /// - page_count: 200
    pub fn new(db: &'a DatabaseConnection, user_uid: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_uid: Some(user_uid),
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            published_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            page_count: 200,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published_date(mut self, published_date: NaiveDate) -> Self {
        self.published_date = published_date;
        self
    }

    pub fn page_count(mut self, page_count: i32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now();
        entity::book::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(self.user_uid),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            publisher: ActiveValue::Set("Test Press".to_string()),
            published_date: ActiveValue::Set(self.published_date),
            page_count: ActiveValue::Set(self.page_count),
            language: ActiveValue::Set("English".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values owned by `user_uid`.
pub async fn create_book(
    db: &DatabaseConnection,
    user_uid: Uuid,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, user_uid).build().await
}
