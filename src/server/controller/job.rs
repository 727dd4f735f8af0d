use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        job::{CreateLocationDto, JobDto, JobInputDto, JobListDto, JobListParams, LocationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, MEMBERS},
        model::job::{CreateLocationParam, JobFilter, JobParam, Location},
        service::job::JobService,
        state::AppState,
    },
};

/// Tag for grouping job listing endpoints in OpenAPI documentation
pub static JOB_TAG: &str = "job";

/// Get one page of visible job listings. Public.
///
/// Both sort orders are ascending. `pages` is never less than one.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    tag = JOB_TAG,
    params(JobListParams),
    responses(
        (status = 200, description = "Page of visible jobs", body = JobListDto),
        (status = 422, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = JobFilter::from_params(params)?;
    let page = JobService::new(&state.db).list(filter).await?;

    Ok(Json(page.into_dto()))
}

/// Post a job listing as the current user.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    tag = JOB_TAG,
    request_body = JobInputDto,
    responses(
        (status = 201, description = "Job created", body = JobDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 422, description = "Invalid job data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JobInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = JobParam::from_dto(payload, Utc::now())?;
    let job = JobService::new(&state.db).create(&user, param).await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}

/// Get a job listing, visible or not. Public.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{uid}",
    tag = JOB_TAG,
    params(("uid" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job listing", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).get(uid).await?;

    Ok(Json(job.into_dto()))
}

/// Replace every editable field of a job listing.
///
/// # Access Control
/// - The job's hirer or an admin
#[utoipa::path(
    put,
    path = "/api/v1/jobs/{uid}",
    tag = JOB_TAG,
    params(("uid" = Uuid, Path, description = "Job ID")),
    request_body = JobInputDto,
    responses(
        (status = 200, description = "Updated job", body = JobDto),
        (status = 403, description = "Not authenticated or not the hirer", body = ErrorDto),
        (status = 404, description = "Job or location not found", body = ErrorDto),
        (status = 422, description = "Invalid job data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
    Json(payload): Json<JobInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = JobParam::from_dto(payload, Utc::now())?;
    let job = JobService::new(&state.db).replace(&user, uid, param).await?;

    Ok(Json(job.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{uid}",
    tag = JOB_TAG,
    params(("uid" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 403, description = "Not authenticated or not the hirer", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    JobService::new(&state.db).delete(&user, uid).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Hide a job listing from the public listing.
#[utoipa::path(
    post,
    path = "/api/v1/jobs/{uid}/cancel",
    tag = JOB_TAG,
    params(("uid" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 201, description = "Job cancelled", body = JobDto),
        (status = 403, description = "Not authenticated or not the hirer", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn cancel_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let job = JobService::new(&state.db).cancel(&user, uid).await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}

/// Show a cancelled job listing again.
#[utoipa::path(
    post,
    path = "/api/v1/jobs/{uid}/reactivate",
    tag = JOB_TAG,
    params(("uid" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 201, description = "Job reactivated", body = JobDto),
        (status = 403, description = "Not authenticated or not the hirer", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn reactivate_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let job = JobService::new(&state.db).reactivate(&user, uid).await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}

/// Get every location, ordered by country then city. Public.
#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "All locations", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let locations = JobService::new(&state.db).get_locations().await?;

    Ok(Json(
        locations
            .into_iter()
            .map(Location::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/locations",
    tag = JOB_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 403, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Blank city or country", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &state.blocklist, &headers)
        .require(MEMBERS)
        .await?;

    let param = CreateLocationParam::from_dto(payload)?;
    let location = JobService::new(&state.db).create_location(param).await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}
