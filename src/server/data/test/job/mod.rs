use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::job::JobRepository,
    error::AppError,
    model::job::{ContractType, JobFilter, JobParam, JobSort, Rate, RatePeriod},
};

mod create;
mod delete;
mod get_visible_page;
mod replace;
mod set_visible;

fn job_param(location_uid: Uuid, skills: &[&str]) -> JobParam {
    JobParam {
        title: "Rust developer".to_string(),
        rate: Rate {
            amount: 650.0,
            period: RatePeriod::Day,
            currency: "EUR".to_string(),
        },
        benefits: "Remote".to_string(),
        location_uid,
        contract_type: ContractType::Contract,
        description: "Backend services".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        live_until: Utc::now() + Duration::days(14),
    }
}

fn filter(page: u64, per_page: u64) -> JobFilter {
    JobFilter {
        date_since_posted: None,
        contract_type: None,
        page,
        per_page,
        sort: JobSort::DatePosted,
    }
}
