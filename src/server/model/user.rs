//! User domain models and parameters.
//!
//! Provides the user domain model with its role, plus parameter types for signup,
//! admin updates, and paginated listing.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{
        LoginResponseDto, LoginUserDto, PaginatedUsersDto, SignupDto, UpdateUserDto, UserDto,
        UserProfileDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::{book::Book, review::Review},
        service::auth::token::TokenUser,
        util::validate,
    },
};

/// Role controlling which endpoints a user may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(()),
        }
    }
}

/// Registered account.
///
/// The password hash stays on the domain model for login verification and is
/// dropped when converting to a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::InvalidStoredValue {
                field: "users.role",
                value: entity.role.clone(),
            })?;

        Ok(Self {
            uid: entity.uid,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role,
            is_verified: entity.is_verified,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            uid: self.uid,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role.to_string(),
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Identity embedded into tokens issued for this user.
    pub fn token_user(&self) -> TokenUser {
        TokenUser {
            email: self.email.clone(),
            user_uid: self.uid,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this user may modify a resource owned by `owner_uid`.
    pub fn can_modify(&self, owner_uid: Option<Uuid>) -> bool {
        self.is_admin() || owner_uid == Some(self.uid)
    }
}

/// Validated signup request.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}

impl SignupParam {
    /// Validates a signup DTO.
    ///
    /// Username must be 1 to 32 characters, email a plausible address, and the
    /// password at least 6 characters. Blank optional names become `None`.
    ///
    /// # Returns
    /// - `Ok(SignupParam)` - Validated parameters
    /// - `Err(AppError::Unprocessable)` - A field failed validation
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        let password = validate::password("password", dto.password)?;

        Ok(Self {
            username: validate::length("username", dto.username, 1, 32)?,
            first_name: dto.first_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            last_name: dto.last_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            email: validate::email(dto.email)?,
            password,
        })
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Admin changes to a user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub role: Option<Role>,
    pub is_verified: Option<bool>,
}

impl UpdateUserParam {
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Role is neither `admin` nor `user`
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let role = dto
            .role
            .map(|r| {
                r.parse::<Role>().map_err(|_| {
                    AppError::Unprocessable(format!("role must be 'admin' or 'user', got '{}'", r))
                })
            })
            .transpose()?;

        Ok(Self {
            role,
            is_verified: dto.is_verified,
        })
    }
}

/// The current user with the books they own and the reviews they wrote.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub books: Vec<Book>,
    pub reviews: Vec<Review>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user: self.user.into_dto(),
            books: self.books.into_iter().map(Book::into_dto).collect(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
        }
    }
}

/// Token pair issued on a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

impl LoginSession {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            message: "Login successful".to_string(),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: LoginUserDto {
                email: self.user.email,
                uid: self.user.uid,
            },
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
