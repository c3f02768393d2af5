use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{
        data::{favorite_planet::FavoritePlanetRepository, planet::PlanetRepository},
        error::{resource::ResourceError, Error},
        model::db::PlanetModel,
        service::validation::require_text,
    },
};

impl TryFrom<PlanetModel> for PlanetDto {
    type Error = serde_json::Error;

    fn try_from(planet: PlanetModel) -> Result<Self, Self::Error> {
        let attributes: BTreeMap<String, String> = serde_json::from_value(planet.attributes)?;

        Ok(Self {
            id: planet.id,
            name: planet.name,
            url: planet.url,
            attributes,
        })
    }
}

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets
            .into_iter()
            .map(PlanetDto::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn create_planet(&self, payload: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let name = require_text("name", payload.name)?;
        let url = require_text("url", payload.url)?;
        let attributes = serde_json::to_value(payload.attributes)?;

        let planet = PlanetRepository::new(self.db)
            .create(name, url, attributes)
            .await?;

        tracing::info!(planet_id = %planet.id, "Created planet");

        Ok(PlanetDto::try_from(planet)?)
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(ResourceError::NotFound("Planet"))?;

        Ok(PlanetDto::try_from(planet)?)
    }

    /// Deletes a planet along with the favorites referencing it.
    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), Error> {
        self.ensure_exists(planet_id).await?;

        let txn = self.db.begin().await?;

        let favorites = FavoritePlanetRepository::new(&txn)
            .delete_by_planet_id(planet_id)
            .await?;
        PlanetRepository::new(&txn).delete(planet_id).await?;

        txn.commit().await?;

        tracing::info!(
            planet_id = %planet_id,
            favorites = favorites.rows_affected,
            "Deleted planet"
        );

        Ok(())
    }

    pub async fn ensure_exists(&self, planet_id: i32) -> Result<(), Error> {
        match PlanetRepository::new(self.db).get_by_id(planet_id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::NotFound("Planet").into()),
        }
    }
}
