//! SeaORM entity models for the bookly database schema.
//!
//! One module per table. Entities are consumed by the repository layer of the
//! main crate and by the `test-utils` crate, which builds in-memory schemas from
//! them.

pub mod prelude;

pub mod book;
pub mod book_tag;
pub mod job;
pub mod job_skill;
pub mod location;
pub mod review;
pub mod tag;
pub mod user;
