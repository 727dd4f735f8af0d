use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateDto {
    pub amount: f64,
    pub amount_per_time: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub uid: Uuid,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationDto {
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub uid: Uuid,
    pub title: String,
    pub rate: RateDto,
    pub benefits: String,
    pub location: LocationDto,
    pub hirer_uid: Uuid,
    pub contract_type: String,
    pub description: String,
    pub skills: Vec<String>,
    pub live_until: DateTime<Utc>,
    pub date_listed: DateTime<Utc>,
    pub visible: bool,
}

/// Payload for creating or fully replacing a job listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobInputDto {
    pub title: String,
    pub rate: RateDto,
    #[serde(default)]
    pub benefits: String,
    pub location_uid: Uuid,
    pub contract_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub live_until: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobListDto {
    pub jobs: Vec<JobDto>,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobSortBy {
    #[default]
    #[serde(alias = "datePosted")]
    DatePosted,
    Rate,
}

/// Query string of the job listing endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobListParams {
    #[serde(alias = "dateSincePosted")]
    pub date_since_posted: Option<NaiveDate>,
    #[serde(alias = "contractType")]
    pub contract_type: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page", alias = "perPage")]
    pub per_page: u64,
    #[serde(default, alias = "sortBy")]
    pub sort_by: JobSortBy,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}
