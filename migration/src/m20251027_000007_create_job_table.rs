use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_user_table::User, m20251027_000006_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(uuid(Job::Uid).primary_key())
                    .col(string(Job::Title))
                    .col(double(Job::RateAmount))
                    .col(string(Job::RatePeriod))
                    .col(string(Job::RateCurrency))
                    .col(string(Job::Benefits))
                    .col(uuid(Job::LocationUid))
                    .col(uuid(Job::HirerUid))
                    .col(string(Job::ContractType))
                    .col(text(Job::Description))
                    .col(timestamp_with_time_zone(Job::LiveUntil))
                    .col(
                        timestamp_with_time_zone(Job::DateListed)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Job::Visible).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_location_uid")
                            .from(Job::Table, Job::LocationUid)
                            .to(Location::Table, Location::Uid)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_hirer_uid")
                            .from(Job::Table, Job::HirerUid)
                            .to(User::Table, User::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    #[sea_orm(iden = "jobs")]
    Table,
    Uid,
    Title,
    RateAmount,
    RatePeriod,
    RateCurrency,
    Benefits,
    LocationUid,
    HirerUid,
    ContractType,
    Description,
    LiveUntil,
    DateListed,
    Visible,
}
