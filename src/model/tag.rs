use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub uid: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagNameDto {
    pub name: String,
}

/// Tags to attach to a book, by name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTagsDto {
    pub tags: Vec<TagNameDto>,
}
