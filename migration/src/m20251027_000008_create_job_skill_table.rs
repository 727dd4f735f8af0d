use sea_orm_migration::{prelude::*, schema::*};

use super::m20251027_000007_create_job_table::Job;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobSkill::Table)
                    .if_not_exists()
                    .col(pk_auto(JobSkill::Id))
                    .col(uuid(JobSkill::JobUid))
                    .col(string(JobSkill::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_skills_job_uid")
                            .from(JobSkill::Table, JobSkill::JobUid)
                            .to(Job::Table, Job::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobSkill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JobSkill {
    #[sea_orm(iden = "job_skills")]
    Table,
    Id,
    JobUid,
    Name,
}
