use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a character with a URL derived from its name and no attributes
    pub async fn insert_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_character_with(name, serde_json::json!({})).await
    }

    pub async fn insert_character_with(
        &self,
        name: &str,
        attributes: serde_json::Value,
    ) -> Result<entity::character::Model, TestError> {
        Ok(entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(format!(
                "https://swapi.dev/api/people/{}",
                name.to_lowercase().replace(' ', "-")
            )),
            attributes: ActiveValue::Set(attributes),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
