//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id and email, admin updates, and paginated
//! listing with conversion between entity models and domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - User fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(param.username),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            is_verified: ActiveValue::Set(false),
            password_hash: ActiveValue::Set(param.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their uid.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that uid
    /// - `Err(AppError)` - Database error or unreadable row
    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(uid).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by exact email match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether an account already uses `email`.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users with pagination.
    ///
    /// Returns a page of users ordered alphabetically by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies an admin update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that uid
    pub async fn update(
        &self,
        uid: Uuid,
        param: UpdateUserParam,
    ) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(is_verified) = param.is_verified {
            active.is_verified = ActiveValue::Set(is_verified);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash replaced
    /// - `Ok(false)` - No user with that uid
    pub async fn set_password(&self, uid: Uuid, password_hash: String) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Uid.eq(uid))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user with their reviews and job listings. Books they own are kept
    /// without an owner.
    ///
    /// Dependent rows are handled explicitly, matching `BookRepository::delete`.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that uid
    pub async fn delete(&self, uid: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let job_uids: Vec<Uuid> = entity::prelude::Job::find()
            .select_only()
            .column(entity::job::Column::Uid)
            .filter(entity::job::Column::HirerUid.eq(uid))
            .into_tuple()
            .all(&txn)
            .await?;
        if !job_uids.is_empty() {
            entity::prelude::JobSkill::delete_many()
                .filter(entity::job_skill::Column::JobUid.is_in(job_uids))
                .exec(&txn)
                .await?;
        }
        entity::prelude::Job::delete_many()
            .filter(entity::job::Column::HirerUid.eq(uid))
            .exec(&txn)
            .await?;
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::UserUid.eq(uid))
            .exec(&txn)
            .await?;
        entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::UserUid, Expr::value(Option::<Uuid>::None))
            .filter(entity::book::Column::UserUid.eq(uid))
            .exec(&txn)
            .await?;
        let result = entity::prelude::User::delete_by_id(uid).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
