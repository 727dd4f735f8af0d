//! Location factory for creating test location entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a location in Warsaw, Poland.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    create_location_in(db, "Warsaw", "Poland").await
}

/// Creates a location with the provided city and country.
pub async fn create_location_in(
    db: &DatabaseConnection,
    city: impl Into<String>,
    country: impl Into<String>,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        uid: ActiveValue::Set(Uuid::new_v4()),
        city: ActiveValue::Set(city.into()),
        state: ActiveValue::Set(None),
        country: ActiveValue::Set(country.into()),
    }
    .insert(db)
    .await
}
