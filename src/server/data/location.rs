//! Location data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::server::model::job::{CreateLocationParam, Location};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, DbErr> {
        let entity = entity::location::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            city: ActiveValue::Set(param.city),
            state: ActiveValue::Set(param.state),
            country: ActiveValue::Set(param.country),
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    /// Gets every location ordered by country, then city.
    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Country)
            .order_by_asc(entity::location::Column::City)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find_by_id(uid)
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }
}
