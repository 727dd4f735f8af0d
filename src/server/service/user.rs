//! User service for business logic.
//!
//! This module provides the `UserService` for the current user's profile and for admin
//! management of accounts. It works with domain models rather than DTOs.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{book::BookRepository, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::user::{PaginatedUsers, UpdateUserParam, User, UserProfile},
    util::validate,
};

pub const MAX_USERS_PER_PAGE: u64 = 100;

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the profile of an authenticated user with the books they own and the
    /// reviews they wrote.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User with books and reviews, newest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_profile(&self, user: User) -> Result<UserProfile, AppError> {
        let book_repo = BookRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        let books = book_repo.get_by_user(user.uid).await?;
        let reviews = review_repo.get_by_user(user.uid).await?;

        Ok(UserProfile {
            user,
            books,
            reviews,
        })
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by username.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page, between 1 and 100
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::Unprocessable)` - `per_page` out of range or `page` past the
    ///   largest row offset
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = validate::range("entries", per_page, 1, MAX_USERS_PER_PAGE)?;
        let page = validate::page("page", page, per_page)?;
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo.get_all_paginated(page, per_page).await?;

        let total_pages = total_items.div_ceil(per_page);

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page,
            per_page,
            total_pages,
        })
    }

    /// Changes a user's role or verification flag.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that uid
    pub async fn update_user(&self, uid: Uuid, param: UpdateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .update(uid, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("User {} updated to role {}", user.uid, user.role);

        Ok(user)
    }

    /// Deletes another user's account.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted along with their reviews and jobs
    /// - `Err(AppError::BadRequest)` - `actor` tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that uid
    pub async fn delete_user(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        if actor.uid == uid {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete(uid).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted by {}", uid, actor.uid);

        Ok(())
    }
}
