//! Tag data repository, including the book/tag link table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::tag::Tag;

/// Repository providing database operations for tags and book tagging.
pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tag, newest first.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_desc(entity::tag::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Inserts a tag. The name must already be validated.
    pub async fn create(&self, name: String) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(uid).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Finds a tag by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Renames a tag.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - Renamed tag
    /// - `Ok(None)` - No tag with that uid
    pub async fn rename(&self, uid: Uuid, name: String) -> Result<Option<Tag>, DbErr> {
        let Some(entity) = entity::prelude::Tag::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::tag::ActiveModel = entity.into();
        active.name = ActiveValue::Set(name);
        let entity = active.update(self.db).await?;

        Ok(Some(Tag::from_entity(entity)))
    }

    /// Deletes a tag after removing all of its book links.
    ///
    /// # Returns
    /// - `Ok(true)` - Tag deleted
    /// - `Ok(false)` - No tag with that uid
    pub async fn delete(&self, uid: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::BookTag::delete_many()
            .filter(entity::book_tag::Column::TagUid.eq(uid))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Tag::delete_by_id(uid).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the tags attached to a book, ordered by name.
    pub async fn get_by_book(&self, book_uid: Uuid) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .join(JoinType::InnerJoin, entity::tag::Relation::BookTag.def())
            .filter(entity::book_tag::Column::BookUid.eq(book_uid))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Attaches a tag to a book unless the link already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Book already had the tag
    pub async fn link(&self, book_uid: Uuid, tag_uid: Uuid) -> Result<bool, DbErr> {
        let existing = entity::prelude::BookTag::find_by_id((book_uid, tag_uid))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::book_tag::ActiveModel {
            book_uid: ActiveValue::Set(book_uid),
            tag_uid: ActiveValue::Set(tag_uid),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }
}
