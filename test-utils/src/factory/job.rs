//! Job factory for creating test job listing entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test job listings with customizable fields.
///
/// Skills are inserted into the `job_skills` table after the job row.
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    location_uid: Uuid,
    hirer_uid: Uuid,
    title: String,
    rate_amount: f64,
    contract_type: String,
    date_listed: DateTime<Utc>,
    visible: bool,
    skills: Vec<String>,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory.
    ///
    /// Defaults:
    /// - title: `"Python developer {id}"`
    /// - rate: 100 USD per day
    /// - contract_type: `"contract"`
    /// - date_listed: now
    /// - visible: `true`
    /// - skills: none
    pub fn new(db: &'a DatabaseConnection, location_uid: Uuid, hirer_uid: Uuid) -> Self {
        Self {
            db,
            location_uid,
            hirer_uid,
            title: format!("Python developer {}", next_id()),
            rate_amount: 100.0,
            contract_type: "contract".to_string(),
            date_listed: Utc::now(),
            visible: true,
            skills: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn rate_amount(mut self, rate_amount: f64) -> Self {
        self.rate_amount = rate_amount;
        self
    }

    pub fn contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = contract_type.into();
        self
    }

    pub fn date_listed(mut self, date_listed: DateTime<Utc>) -> Self {
        self.date_listed = date_listed;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builds and inserts the job and its skills into the database.
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        let job = entity::job::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            rate_amount: ActiveValue::Set(self.rate_amount),
            rate_period: ActiveValue::Set("day".to_string()),
            rate_currency: ActiveValue::Set("USD".to_string()),
            benefits: ActiveValue::Set("Work from Home".to_string()),
            location_uid: ActiveValue::Set(self.location_uid),
            hirer_uid: ActiveValue::Set(self.hirer_uid),
            contract_type: ActiveValue::Set(self.contract_type),
            description: ActiveValue::Set("Python dev".to_string()),
            live_until: ActiveValue::Set(self.date_listed + Duration::days(30)),
            date_listed: ActiveValue::Set(self.date_listed),
            visible: ActiveValue::Set(self.visible),
        }
        .insert(self.db)
        .await?;

        for name in self.skills {
            entity::job_skill::ActiveModel {
                job_uid: ActiveValue::Set(job.uid),
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(job)
    }
}

/// Creates a visible job listing with default values.
pub async fn create_job(
    db: &DatabaseConnection,
    location_uid: Uuid,
    hirer_uid: Uuid,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, location_uid, hirer_uid).build().await
}
