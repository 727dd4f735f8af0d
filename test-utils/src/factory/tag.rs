//! Tag factory for creating test tag entities and book links.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a tag with a unique default name (`"tag-{id}"`).
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_tag_with_name(db, format!("tag-{}", next_id())).await
}

/// Creates a tag with the provided name.
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Links an existing tag to an existing book.
pub async fn tag_book(
    db: &DatabaseConnection,
    book_uid: Uuid,
    tag_uid: Uuid,
) -> Result<entity::book_tag::Model, DbErr> {
    entity::book_tag::ActiveModel {
        book_uid: ActiveValue::Set(book_uid),
        tag_uid: ActiveValue::Set(tag_uid),
    }
    .insert(db)
    .await
}
