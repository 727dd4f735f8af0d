//! Job listing data repository.
//!
//! Jobs are always returned with their location and skills attached. Writes that touch
//! both the job row and its skill rows run in a single transaction.

use std::collections::HashMap;

use chrono::{NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::job::{Job, JobFilter, JobParam, JobSort},
};

type JobRow = (entity::job::Model, Option<entity::location::Model>);

/// Repository providing database operations for job listings.
pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a visible job listed now, with its skills.
    ///
    /// # Arguments
    /// - `hirer_uid` - User posting the job
    /// - `param` - Validated job fields; the location must exist
    ///
    /// # Returns
    /// - `Ok(Job)` - The created job with location and skills
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, hirer_uid: Uuid, param: JobParam) -> Result<Job, AppError> {
        let uid = Uuid::new_v4();
        let txn = self.db.begin().await?;

        entity::job::ActiveModel {
            uid: ActiveValue::Set(uid),
            title: ActiveValue::Set(param.title),
            rate_amount: ActiveValue::Set(param.rate.amount),
            rate_period: ActiveValue::Set(param.rate.period.as_str().to_string()),
            rate_currency: ActiveValue::Set(param.rate.currency),
            benefits: ActiveValue::Set(param.benefits),
            location_uid: ActiveValue::Set(param.location_uid),
            hirer_uid: ActiveValue::Set(hirer_uid),
            contract_type: ActiveValue::Set(param.contract_type.as_str().to_string()),
            description: ActiveValue::Set(param.description),
            live_until: ActiveValue::Set(param.live_until),
            date_listed: ActiveValue::Set(Utc::now()),
            visible: ActiveValue::Set(true),
        }
        .insert(&txn)
        .await?;
        insert_skills(&txn, uid, param.skills).await?;

        txn.commit().await?;

        self.find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Job {} not found after creation", uid)))
    }

    /// Finds a job by uid regardless of visibility.
    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Job>, AppError> {
        let row = entity::prelude::Job::find_by_id(uid)
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.attach_skills(vec![row]).await?.pop())
    }

    /// Gets one page of visible jobs matching `filter`.
    ///
    /// # Returns
    /// - `Ok((jobs, total))` - Jobs for the requested page and total matching job count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_visible_page(&self, filter: &JobFilter) -> Result<(Vec<Job>, u64), AppError> {
        let mut query = entity::prelude::Job::find().filter(entity::job::Column::Visible.eq(true));

        if let Some(date) = filter.date_since_posted {
            let since = date.and_time(NaiveTime::MIN).and_utc();
            query = query.filter(entity::job::Column::DateListed.gte(since));
        }
        if let Some(contract_type) = filter.contract_type {
            query = query.filter(entity::job::Column::ContractType.eq(contract_type.as_str()));
        }

        let query = match filter.sort {
            JobSort::DatePosted => query.order_by_asc(entity::job::Column::DateListed),
            JobSort::Rate => query.order_by_asc(entity::job::Column::RateAmount),
        }
        .order_by_asc(entity::job::Column::Uid);

        let paginator = query
            .find_also_related(entity::prelude::Location)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok((self.attach_skills(rows).await?, total))
    }

    /// Replaces every editable field of a job, including its skills.
    ///
    /// Listing date, hirer, and visibility are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Job))` - Updated job
    /// - `Ok(None)` - No job with that uid
    pub async fn replace(&self, uid: Uuid, param: JobParam) -> Result<Option<Job>, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Job::find_by_id(uid).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::job::ActiveModel = entity.into();
        active.title = ActiveValue::Set(param.title);
        active.rate_amount = ActiveValue::Set(param.rate.amount);
        active.rate_period = ActiveValue::Set(param.rate.period.as_str().to_string());
        active.rate_currency = ActiveValue::Set(param.rate.currency);
        active.benefits = ActiveValue::Set(param.benefits);
        active.location_uid = ActiveValue::Set(param.location_uid);
        active.contract_type = ActiveValue::Set(param.contract_type.as_str().to_string());
        active.description = ActiveValue::Set(param.description);
        active.live_until = ActiveValue::Set(param.live_until);
        active.update(&txn).await?;

        entity::prelude::JobSkill::delete_many()
            .filter(entity::job_skill::Column::JobUid.eq(uid))
            .exec(&txn)
            .await?;
        insert_skills(&txn, uid, param.skills).await?;

        txn.commit().await?;

        self.find_by_uid(uid).await
    }

    /// Shows or hides a job in the public listing.
    ///
    /// # Returns
    /// - `Ok(Some(Job))` - Updated job
    /// - `Ok(None)` - No job with that uid
    pub async fn set_visible(&self, uid: Uuid, visible: bool) -> Result<Option<Job>, AppError> {
        let Some(entity) = entity::prelude::Job::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::job::ActiveModel = entity.into();
        active.visible = ActiveValue::Set(visible);
        active.update(self.db).await?;

        self.find_by_uid(uid).await
    }

    /// Deletes a job and its skills.
    ///
    /// # Returns
    /// - `Ok(true)` - Job deleted
    /// - `Ok(false)` - No job with that uid
    pub async fn delete(&self, uid: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::JobSkill::delete_many()
            .filter(entity::job_skill::Column::JobUid.eq(uid))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Job::delete_by_id(uid).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the skills for a batch of job rows and builds domain models, keeping row order.
    async fn attach_skills(&self, rows: Vec<JobRow>) -> Result<Vec<Job>, AppError> {
        let uids: Vec<Uuid> = rows.iter().map(|(job, _)| job.uid).collect();

        let mut skills: HashMap<Uuid, Vec<entity::job_skill::Model>> = HashMap::new();
        if !uids.is_empty() {
            let entities = entity::prelude::JobSkill::find()
                .filter(entity::job_skill::Column::JobUid.is_in(uids))
                .order_by_asc(entity::job_skill::Column::Id)
                .all(self.db)
                .await?;
            for skill in entities {
                skills.entry(skill.job_uid).or_default().push(skill);
            }
        }

        rows.into_iter()
            .map(|(job, location)| {
                let location = location.ok_or_else(|| {
                    AppError::InternalError(format!("Job {} references a missing location", job.uid))
                })?;
                let job_skills = skills.remove(&job.uid).unwrap_or_default();
                Job::from_entity(job, location, job_skills)
            })
            .collect()
    }
}

async fn insert_skills<C: ConnectionTrait>(
    db: &C,
    job_uid: Uuid,
    skills: Vec<String>,
) -> Result<(), DbErr> {
    for name in skills {
        entity::job_skill::ActiveModel {
            job_uid: ActiveValue::Set(job_uid),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
