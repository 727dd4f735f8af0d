use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251020_000002_create_book_table::Book, m20251022_000004_create_tag_table::Tag};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookTag::Table)
                    .if_not_exists()
                    .col(uuid(BookTag::BookUid))
                    .col(uuid(BookTag::TagUid))
                    .primary_key(
                        Index::create()
                            .name("pk_book_tags")
                            .col(BookTag::BookUid)
                            .col(BookTag::TagUid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_tags_book_uid")
                            .from(BookTag::Table, BookTag::BookUid)
                            .to(Book::Table, Book::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_tags_tag_uid")
                            .from(BookTag::Table, BookTag::TagUid)
                            .to(Tag::Table, Tag::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookTag {
    #[sea_orm(iden = "book_tags")]
    Table,
    BookUid,
    TagUid,
}
