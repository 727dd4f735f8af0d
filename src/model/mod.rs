//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod book;
pub mod job;
pub mod mail;
pub mod review;
pub mod tag;
pub mod user;
