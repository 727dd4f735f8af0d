use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::data::tag::TagRepository;

mod create;
mod delete;
mod link;
mod rename;
