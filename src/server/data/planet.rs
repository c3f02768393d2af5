use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    ///
    /// # Arguments
    /// - `name`: Display name of the planet
    /// - `url`: Reference URL for the planet
    /// - `attributes`: JSON object of additional string attributes
    pub async fn create(
        &self,
        name: String,
        url: String,
        attributes: serde_json::Value,
    ) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            url: ActiveValue::Set(url),
            attributes: ActiveValue::Set(attributes),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        planet_id: i32,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, check [`DeleteResult::rows_affected`]
    /// to confirm the deletion.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
