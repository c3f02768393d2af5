use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with a URL derived from its name and no attributes
    pub async fn insert_planet(
        &self,
        name: &str,
    ) -> Result<entity::planet::Model, TestError> {
        self.insert_planet_with(name, serde_json::json!({})).await
    }

    pub async fn insert_planet_with(
        &self,
        name: &str,
        attributes: serde_json::Value,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(format!(
                "https://swapi.dev/api/planets/{}",
                name.to_lowercase().replace(' ', "-")
            )),
            attributes: ActiveValue::Set(attributes),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
