pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_book_table;
mod m20251021_000003_create_review_table;
mod m20251022_000004_create_tag_table;
mod m20251022_000005_create_book_tag_table;
mod m20251027_000006_create_location_table;
mod m20251027_000007_create_job_table;
mod m20251027_000008_create_job_skill_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_book_table::Migration),
            Box::new(m20251021_000003_create_review_table::Migration),
            Box::new(m20251022_000004_create_tag_table::Migration),
            Box::new(m20251022_000005_create_book_tag_table::Migration),
            Box::new(m20251027_000006_create_location_table::Migration),
            Box::new(m20251027_000007_create_job_table::Migration),
            Box::new(m20251027_000008_create_job_skill_table::Migration),
        ]
    }
}
