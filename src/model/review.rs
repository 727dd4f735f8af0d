use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub uid: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub user_uid: Uuid,
    pub book_uid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub rating: i32,
    pub review_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub review_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewStatsDto {
    pub book_uid: Uuid,
    pub total_reviews: u64,
    pub average_rating: f64,
}
