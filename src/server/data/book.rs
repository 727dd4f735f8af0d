//! Book data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::book::{Book, CreateBookParam, UpdateBookParam};

/// Repository providing database operations for books.
pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new book.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBookParam) -> Result<Book, DbErr> {
        let now = Utc::now();
        let entity = entity::book::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            user_uid: ActiveValue::Set(Some(param.user_uid)),
            title: ActiveValue::Set(param.title),
            author: ActiveValue::Set(param.author),
            publisher: ActiveValue::Set(param.publisher),
            published_date: ActiveValue::Set(param.published_date),
            page_count: ActiveValue::Set(param.page_count),
            language: ActiveValue::Set(param.language),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Gets every book, newest first.
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_desc(entity::book::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Finds a book by uid.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that uid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(uid).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Gets the books owned by `user_uid`, newest first.
    pub async fn get_by_user(&self, user_uid: Uuid) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::UserUid.eq(user_uid))
            .order_by_desc(entity::book::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Applies a partial update to a book.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Updated book
    /// - `Ok(None)` - No book with that uid
    pub async fn update(&self, uid: Uuid, param: UpdateBookParam) -> Result<Option<Book>, DbErr> {
        let Some(entity) = entity::prelude::Book::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::book::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(author) = param.author {
            active.author = ActiveValue::Set(author);
        }
        if let Some(publisher) = param.publisher {
            active.publisher = ActiveValue::Set(publisher);
        }
        if let Some(published_date) = param.published_date {
            active.published_date = ActiveValue::Set(published_date);
        }
        if let Some(page_count) = param.page_count {
            active.page_count = ActiveValue::Set(page_count);
        }
        if let Some(language) = param.language {
            active.language = ActiveValue::Set(language);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Book::from_entity(entity)))
    }

    /// Deletes a book along with its reviews and tag links.
    ///
    /// Dependent rows are removed explicitly so the result does not depend on the
    /// backend enforcing foreign key cascades.
    ///
    /// # Returns
    /// - `Ok(true)` - Book deleted
    /// - `Ok(false)` - No book with that uid
    pub async fn delete(&self, uid: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::BookTag::delete_many()
            .filter(entity::book_tag::Column::BookUid.eq(uid))
            .exec(&txn)
            .await?;
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BookUid.eq(uid))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Book::delete_by_id(uid).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
