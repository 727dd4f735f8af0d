//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let book = factory::book::create_book(&db, user.uid).await?;
//!
//! let (user, book) = factory::helpers::create_book_with_owner(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod helpers;
pub mod job;
pub mod location;
pub mod review;
pub mod tag;
pub mod user;

pub use book::create_book;
pub use job::create_job;
pub use location::create_location;
pub use review::create_review;
pub use tag::create_tag;
pub use user::create_user;
