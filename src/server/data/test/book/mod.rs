use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::book::BookRepository,
    model::book::{CreateBookParam, UpdateBookParam},
};

mod create;
mod delete;
mod get_by_user;
mod update;

fn create_param(user_uid: Uuid, title: &str) -> CreateBookParam {
    CreateBookParam {
        user_uid,
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        publisher: "Chilton".to_string(),
        published_date: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
        page_count: 412,
        language: "English".to_string(),
    }
}
