//! Tag service for business logic.
//!
//! Tag names are unique. Attaching tags to a book creates any tag that does not exist
//! yet and skips links that are already present.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{book::BookRepository, tag::TagRepository},
    error::AppError,
    model::{book::BookDetail, tag::Tag},
    service::book::BookService,
};

fn tag_not_found() -> AppError {
    AppError::NotFound("Tag not found".to_string())
}

pub struct TagService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let tag_repo = TagRepository::new(self.db);

        Ok(tag_repo.get_all().await?)
    }

    /// Creates a tag from an already validated name.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - A tag with that name exists
    pub async fn create(&self, name: String) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);

        if tag_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict("Tag exists".to_string()));
        }

        Ok(tag_repo.create(name).await?)
    }

    /// Attaches tags to a book by name, creating missing tags.
    ///
    /// # Returns
    /// - `Ok(BookDetail)` - The book with its reviews and full tag list
    /// - `Err(AppError::NotFound)` - No book with that uid
    pub async fn add_to_book(
        &self,
        book_uid: Uuid,
        names: Vec<String>,
    ) -> Result<BookDetail, AppError> {
        let book_repo = BookRepository::new(self.db);
        let tag_repo = TagRepository::new(self.db);

        if book_repo.find_by_uid(book_uid).await?.is_none() {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        for name in names {
            let tag = match tag_repo.find_by_name(&name).await? {
                Some(tag) => tag,
                None => tag_repo.create(name).await?,
            };

            if tag_repo.link(book_uid, tag.uid).await? {
                tracing::debug!("Tagged book {} with {}", book_uid, tag.name);
            }
        }

        BookService::new(self.db).get_detail(book_uid).await
    }

    /// Renames a tag to an already validated name.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No tag with that uid
    /// - `Err(AppError::Conflict)` - Another tag already has that name
    pub async fn rename(&self, uid: Uuid, name: String) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);

        if tag_repo.find_by_uid(uid).await?.is_none() {
            return Err(tag_not_found());
        }

        if let Some(existing) = tag_repo.find_by_name(&name).await? {
            if existing.uid != uid {
                return Err(AppError::Conflict("Tag exists".to_string()));
            }
        }

        tag_repo.rename(uid, name).await?.ok_or_else(tag_not_found)
    }

    /// Deletes a tag and removes it from every book.
    pub async fn delete(&self, uid: Uuid) -> Result<(), AppError> {
        let tag_repo = TagRepository::new(self.db);

        if !tag_repo.delete(uid).await? {
            return Err(tag_not_found());
        }

        tracing::info!("Tag {} deleted", uid);

        Ok(())
    }
}
