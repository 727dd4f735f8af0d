//! Tag domain model.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::tag::TagDto,
    server::{error::AppError, util::validate},
};

pub const MAX_TAG_NAME: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub uid: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            uid: entity.uid,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            uid: self.uid,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// Trims a tag name and checks it is 1 to 50 characters.
pub fn validate_tag_name(name: String) -> Result<String, AppError> {
    validate::length("name", name, 1, MAX_TAG_NAME)
}
