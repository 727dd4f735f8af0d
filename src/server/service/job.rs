//! Job listing service for business logic.
//!
//! Jobs may only be replaced, deleted, cancelled, or reactivated by the user who posted
//! them or by an admin. Cancelling hides a job from the public listing without deleting
//! it.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{job::JobRepository, location::LocationRepository},
    error::AppError,
    model::{
        job::{CreateLocationParam, Job, JobFilter, JobPage, JobParam, Location},
        user::User,
    },
    util::validate,
};

fn job_not_found(uid: Uuid) -> AppError {
    AppError::NotFound(format!("Job listing with ID {} not found", uid))
}

pub struct JobService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the public listing.
    ///
    /// # Returns
    /// - `Ok(JobPage)` - Visible jobs for the page and the page count, at least one
    /// - `Err(AppError::Unprocessable)` - `page` lies past the largest row offset
    pub async fn list(&self, filter: JobFilter) -> Result<JobPage, AppError> {
        validate::page("page", filter.page, filter.per_page)?;
        let job_repo = JobRepository::new(self.db);

        let (jobs, total) = job_repo.get_visible_page(&filter).await?;

        Ok(JobPage {
            jobs,
            pages: JobPage::page_count(total, filter.per_page),
        })
    }

    pub async fn get(&self, uid: Uuid) -> Result<Job, AppError> {
        let job_repo = JobRepository::new(self.db);

        job_repo.find_by_uid(uid).await?.ok_or_else(|| job_not_found(uid))
    }

    /// Posts a job with `hirer` as its owner.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The referenced location does not exist
    pub async fn create(&self, hirer: &User, param: JobParam) -> Result<Job, AppError> {
        let job_repo = JobRepository::new(self.db);

        self.ensure_location_exists(param.location_uid).await?;

        let job = job_repo.create(hirer.uid, param).await?;

        tracing::info!("Job {} posted by {}", job.uid, hirer.uid);

        Ok(job)
    }

    /// Replaces every editable field of a job.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No job with that uid, or the new location does not exist
    /// - `Err(AppError::Forbidden)` - `actor` is neither the hirer nor an admin
    pub async fn replace(&self, actor: &User, uid: Uuid, param: JobParam) -> Result<Job, AppError> {
        let job_repo = JobRepository::new(self.db);

        self.ensure_can_modify(actor, uid).await?;
        self.ensure_location_exists(param.location_uid).await?;

        job_repo
            .replace(uid, param)
            .await?
            .ok_or_else(|| job_not_found(uid))
    }

    pub async fn delete(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let job_repo = JobRepository::new(self.db);

        self.ensure_can_modify(actor, uid).await?;

        if !job_repo.delete(uid).await? {
            return Err(job_not_found(uid));
        }

        tracing::info!("Job {} deleted by {}", uid, actor.uid);

        Ok(())
    }

    /// Hides a job from the public listing.
    pub async fn cancel(&self, actor: &User, uid: Uuid) -> Result<Job, AppError> {
        self.set_visible(actor, uid, false).await
    }

    /// Shows a previously cancelled job in the public listing again.
    pub async fn reactivate(&self, actor: &User, uid: Uuid) -> Result<Job, AppError> {
        self.set_visible(actor, uid, true).await
    }

    /// Gets every location, ordered by country then city.
    pub async fn get_locations(&self) -> Result<Vec<Location>, AppError> {
        let location_repo = LocationRepository::new(self.db);

        Ok(location_repo.get_all().await?)
    }

    pub async fn create_location(&self, param: CreateLocationParam) -> Result<Location, AppError> {
        let location_repo = LocationRepository::new(self.db);

        Ok(location_repo.create(param).await?)
    }

    async fn set_visible(&self, actor: &User, uid: Uuid, visible: bool) -> Result<Job, AppError> {
        let job_repo = JobRepository::new(self.db);

        self.ensure_can_modify(actor, uid).await?;

        let job = job_repo
            .set_visible(uid, visible)
            .await?
            .ok_or_else(|| job_not_found(uid))?;

        tracing::info!("Job {} visibility set to {} by {}", uid, visible, actor.uid);

        Ok(job)
    }

    async fn ensure_can_modify(&self, actor: &User, uid: Uuid) -> Result<(), AppError> {
        let job = self.get(uid).await?;

        if !actor.can_modify(Some(job.hirer_uid)) {
            return Err(AppError::Forbidden(
                "You can only modify job listings you posted".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_location_exists(&self, location_uid: Uuid) -> Result<(), AppError> {
        let location_repo = LocationRepository::new(self.db);

        if location_repo.find_by_uid(location_uid).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Location with ID {} not found",
                location_uid
            )));
        }

        Ok(())
    }
}
