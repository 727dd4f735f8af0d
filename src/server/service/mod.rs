//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence, uniqueness, and ownership rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod book;
pub mod job;
pub mod mail;
pub mod review;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
