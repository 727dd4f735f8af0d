//! Book service for business logic.
//!
//! Handles book listing, detail assembly with reviews and tags, and ownership checks for
//! modifications. Only the owner of a book or an admin may change or delete it.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository, tag::TagRepository},
    error::AppError,
    model::{
        book::{Book, BookDetail, CreateBookParam, UpdateBookParam},
        user::User,
    },
};

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

pub struct BookService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every book, newest first.
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let book_repo = BookRepository::new(self.db);

        Ok(book_repo.get_all().await?)
    }

    /// Gets the books owned by a user, newest first.
    pub async fn get_by_user(&self, user_uid: Uuid) -> Result<Vec<Book>, AppError> {
        let book_repo = BookRepository::new(self.db);

        Ok(book_repo.get_by_user(user_uid).await?)
    }

    pub async fn create(&self, param: CreateBookParam) -> Result<Book, AppError> {
        let book_repo = BookRepository::new(self.db);

        let book = book_repo.create(param).await?;

        tracing::info!("Book {} created by {:?}", book.uid, book.user_uid);

        Ok(book)
    }

    /// Gets a book with its reviews and tags.
    ///
    /// # Returns
    /// - `Ok(BookDetail)` - Book, reviews newest first, tags by name
    /// - `Err(AppError::NotFound)` - No book with that uid
    pub async fn get_detail(&self, uid: Uuid) -> Result<BookDetail, AppError> {
        let book_repo = BookRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        let book = book_repo.find_by_uid(uid).await?.ok_or_else(book_not_found)?;
        let reviews = review_repo.get_by_book(uid).await?;
        let tags = tag_repo.get_by_book(uid).await?;

        Ok(BookDetail {
            book,
            reviews,
            tags,
        })
    }

    /// Applies a partial update on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(Book)` - Updated book
    /// - `Err(AppError::NotFound)` - No book with that uid
    /// - `Err(AppError::Forbidden)` - `actor` is neither the owner nor an admin
    pub async fn update(
        &self,
        actor: &User,
        uid: Uuid,
        param: UpdateBookParam,
    ) -> Result<Book, AppError> {
        let book_repo = BookRepository::new(self.db);

        self.ensure_can_modify(actor, uid).await?;

        book_repo.update(uid, param).await?.ok_or_else(book_not_found)
    }

    /// Deletes a book with its reviews and tag links on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(())` - Book deleted
    /// - `Err(AppError::NotFound)` - No book with that uid
    /// - `Err(AppError::Forbidden)` - `actor` is neither the owner nor an admin
    pub async fn delete(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let book_repo = BookRepository::new(self.db);

        self.ensure_can_modify(actor, uid).await?;

        if !book_repo.delete(uid).await? {
            return Err(book_not_found());
        }

        tracing::info!("Book {} deleted by {}", uid, actor.uid);

        Ok(())
    }

    async fn ensure_can_modify(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let book_repo = BookRepository::new(self.db);

        let book = book_repo.find_by_uid(uid).await?.ok_or_else(book_not_found)?;

        if !actor.can_modify(book.user_uid) {
            return Err(AppError::Forbidden(
                "You can only modify books you own".to_string(),
            ));
        }

        Ok(())
    }
}
