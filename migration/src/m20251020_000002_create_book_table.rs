use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(uuid(Book::Uid).primary_key())
                    .col(uuid_null(Book::UserUid))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(string(Book::Publisher))
                    .col(date(Book::PublishedDate))
                    .col(integer(Book::PageCount))
                    .col(string(Book::Language))
                    .col(
                        timestamp_with_time_zone(Book::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Book::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_user_uid")
                            .from(Book::Table, Book::UserUid)
                            .to(User::Table, User::Uid)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    #[sea_orm(iden = "books")]
    Table,
    Uid,
    UserUid,
    Title,
    Author,
    Publisher,
    PublishedDate,
    PageCount,
    Language,
    CreatedAt,
    UpdatedAt,
}
