use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParam, ReviewPage, UpdateReviewParam},
};

mod create;
mod delete;
mod get_page;
mod get_rating_totals;
mod update;
