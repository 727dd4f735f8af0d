//! Job listing domain models and parameters.
//!
//! A job carries its pay rate inline, references a location, and owns a list of
//! skill names stored in their own table.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    model::job::{
        CreateLocationDto, JobDto, JobInputDto, JobListDto, JobListParams, JobSortBy, LocationDto,
        RateDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        util::validate,
    },
};

pub const MAX_PER_PAGE: u64 = 100;

/// Time unit a rate amount is paid per.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatePeriod {
    Hour,
    Day,
    Month,
    Year,
}

impl RatePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatePeriod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractType {
    Contract,
    Permanent,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Permanent => "permanent",
        }
    }
}

impl FromStr for ContractType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contract" => Ok(Self::Contract),
            "permanent" => Ok(Self::Permanent),
            _ => Err(()),
        }
    }
}

/// Pay rate stored inline on the job row.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub amount: f64,
    pub period: RatePeriod,
    pub currency: String,
}

impl Rate {
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Amount below 1, unknown period, or a currency
    ///   that is not three ASCII letters
    pub fn from_dto(dto: RateDto) -> Result<Self, AppError> {
        if !dto.amount.is_finite() || dto.amount < 1.0 {
            return Err(AppError::Unprocessable(
                "rate.amount must be at least 1".to_string(),
            ));
        }

        let period = dto.amount_per_time.parse::<RatePeriod>().map_err(|_| {
            AppError::Unprocessable(
                "rate.amountPerTime must be one of hour, day, month, year".to_string(),
            )
        })?;

        let currency = dto.currency.trim().to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::Unprocessable(
                "rate.currency must be a three letter code".to_string(),
            ));
        }

        Ok(Self {
            amount: dto.amount,
            period,
            currency,
        })
    }

    pub fn into_dto(self) -> RateDto {
        RateDto {
            amount: self.amount,
            amount_per_time: self.period.to_string(),
            currency: self.currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub uid: Uuid,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            uid: entity.uid,
            city: entity.city,
            state: entity.state,
            country: entity.country,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            uid: self.uid,
            city: self.city,
            state: self.state,
            country: self.country,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLocationParam {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

impl CreateLocationParam {
    pub fn from_dto(dto: CreateLocationDto) -> Result<Self, AppError> {
        Ok(Self {
            city: validate::required("city", dto.city)?,
            state: dto.state.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            country: validate::required("country", dto.country)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub uid: Uuid,
    pub title: String,
    pub rate: Rate,
    pub benefits: String,
    pub location: Location,
    pub hirer_uid: Uuid,
    pub contract_type: ContractType,
    pub description: String,
    pub skills: Vec<String>,
    pub live_until: DateTime<Utc>,
    pub date_listed: DateTime<Utc>,
    pub visible: bool,
}

impl Job {
    /// Assembles a job from its row, its location row, and its skill rows.
    ///
    /// # Returns
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored rate period or
    ///   contract type is not a known value
    pub fn from_entity(
        entity: entity::job::Model,
        location: entity::location::Model,
        skills: Vec<entity::job_skill::Model>,
    ) -> Result<Self, AppError> {
        let period = entity
            .rate_period
            .parse::<RatePeriod>()
            .map_err(|_| InternalError::InvalidStoredValue {
                field: "jobs.rate_period",
                value: entity.rate_period.clone(),
            })?;
        let contract_type = entity.contract_type.parse::<ContractType>().map_err(|_| {
            InternalError::InvalidStoredValue {
                field: "jobs.contract_type",
                value: entity.contract_type.clone(),
            }
        })?;

        Ok(Self {
            uid: entity.uid,
            title: entity.title,
            rate: Rate {
                amount: entity.rate_amount,
                period,
                currency: entity.rate_currency,
            },
            benefits: entity.benefits,
            location: Location::from_entity(location),
            hirer_uid: entity.hirer_uid,
            contract_type,
            description: entity.description,
            skills: skills.into_iter().map(|s| s.name).collect(),
            live_until: entity.live_until,
            date_listed: entity.date_listed,
            visible: entity.visible,
        })
    }

    pub fn into_dto(self) -> JobDto {
        JobDto {
            uid: self.uid,
            title: self.title,
            rate: self.rate.into_dto(),
            benefits: self.benefits,
            location: self.location.into_dto(),
            hirer_uid: self.hirer_uid,
            contract_type: self.contract_type.as_str().to_string(),
            description: self.description,
            skills: self.skills,
            live_until: self.live_until,
            date_listed: self.date_listed,
            visible: self.visible,
        }
    }
}

/// Editable fields of a job, used for both creation and full replacement.
#[derive(Debug, Clone)]
pub struct JobParam {
    pub title: String,
    pub rate: Rate,
    pub benefits: String,
    pub location_uid: Uuid,
    pub contract_type: ContractType,
    pub description: String,
    pub skills: Vec<String>,
    pub live_until: DateTime<Utc>,
}

impl JobParam {
    /// Validates the DTO against the current time `now`.
    ///
    /// Blank skill names are dropped.
    ///
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Blank title, invalid rate, unknown contract
    ///   type, or `liveUntil` not after `now`
    pub fn from_dto(dto: JobInputDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        let contract_type = dto.contract_type.parse::<ContractType>().map_err(|_| {
            AppError::Unprocessable(
                "contractType must be one of contract, permanent".to_string(),
            )
        })?;

        if dto.live_until <= now {
            return Err(AppError::Unprocessable(
                "liveUntil must be in the future".to_string(),
            ));
        }

        Ok(Self {
            title: validate::required("title", dto.title)?,
            rate: Rate::from_dto(dto.rate)?,
            benefits: dto.benefits.trim().to_string(),
            location_uid: dto.location_uid,
            contract_type,
            description: dto.description,
            skills: dto
                .skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            live_until: dto.live_until,
        })
    }
}

/// Ordering applied to the job listing; both are ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    #[default]
    DatePosted,
    Rate,
}

/// Validated listing query. `page` is one-based.
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub date_since_posted: Option<NaiveDate>,
    pub contract_type: Option<ContractType>,
    pub page: u64,
    pub per_page: u64,
    pub sort: JobSort,
}

impl JobFilter {
    pub fn from_params(params: JobListParams) -> Result<Self, AppError> {
        if params.page < 1 {
            return Err(AppError::Unprocessable("page must be at least 1".to_string()));
        }

        let contract_type = params
            .contract_type
            .map(|c| {
                c.parse::<ContractType>().map_err(|_| {
                    AppError::Unprocessable(
                        "contract_type must be one of contract, permanent".to_string(),
                    )
                })
            })
            .transpose()?;

        let per_page = validate::range("per_page", params.per_page, 1, MAX_PER_PAGE)?;

        Ok(Self {
            date_since_posted: params.date_since_posted,
            contract_type,
            page: validate::page("page", params.page, per_page)?,
            per_page,
            sort: match params.sort_by {
                JobSortBy::DatePosted => JobSort::DatePosted,
                JobSortBy::Rate => JobSort::Rate,
            },
        })
    }
}

/// One page of visible jobs and the page count for the whole filtered set.
#[derive(Debug, Clone)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub pages: u64,
}

impl JobPage {
    /// Page count for `total` matches, never less than one.
    pub fn page_count(total: u64, per_page: u64) -> u64 {
        total.div_ceil(per_page.max(1)).max(1)
    }

    pub fn into_dto(self) -> JobListDto {
        JobListDto {
            jobs: self.jobs.into_iter().map(Job::into_dto).collect(),
            pages: self.pages,
        }
    }
}
