use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{
        data::{character::CharacterRepository, favorite_character::FavoriteCharacterRepository},
        error::{resource::ResourceError, Error},
        model::db::CharacterModel,
        service::validation::require_text,
    },
};

impl TryFrom<CharacterModel> for CharacterDto {
    type Error = serde_json::Error;

    fn try_from(character: CharacterModel) -> Result<Self, Self::Error> {
        let attributes: BTreeMap<String, String> = serde_json::from_value(character.attributes)?;

        Ok(Self {
            id: character.id,
            name: character.name,
            url: character.url,
            attributes,
        })
    }
}

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        let characters = characters
            .into_iter()
            .map(CharacterDto::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(characters)
    }

    /// Creates a character from the request body.
    ///
    /// `name` and `url` must be present and not blank, `attributes` is stored as given.
    pub async fn create_character(&self, payload: CreateCharacterDto) -> Result<CharacterDto, Error> {
        let name = require_text("name", payload.name)?;
        let url = require_text("url", payload.url)?;
        let attributes = serde_json::to_value(payload.attributes)?;

        let character = CharacterRepository::new(self.db)
            .create(name, url, attributes)
            .await?;

        tracing::info!(character_id = %character.id, "Created character");

        Ok(CharacterDto::try_from(character)?)
    }

    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(ResourceError::NotFound("Character"))?;

        Ok(CharacterDto::try_from(character)?)
    }

    /// Deletes a character and every favorite referencing it in one transaction.
    pub async fn delete_character(&self, character_id: i32) -> Result<(), Error> {
        self.ensure_exists(character_id).await?;

        let txn = self.db.begin().await?;

        let favorites = FavoriteCharacterRepository::new(&txn)
            .delete_by_character_id(character_id)
            .await?;
        CharacterRepository::new(&txn).delete(character_id).await?;

        txn.commit().await?;

        tracing::info!(
            character_id = %character_id,
            favorites = favorites.rows_affected,
            "Deleted character"
        );

        Ok(())
    }

    pub async fn ensure_exists(&self, character_id: i32) -> Result<(), Error> {
        match CharacterRepository::new(self.db).get_by_id(character_id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::NotFound("Character").into()),
        }
    }
}
