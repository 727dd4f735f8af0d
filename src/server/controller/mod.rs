//! HTTP handlers.
//!
//! Each handler runs the auth gate it needs, converts DTOs into validated parameters,
//! calls a service, and converts the resulting domain model back into a DTO.

pub mod admin;
pub mod auth;
pub mod book;
pub mod job;
pub mod mail;
pub mod review;
pub mod tag;
