use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::location::LocationRepository, model::job::CreateLocationParam};

mod create;
mod get_all;
