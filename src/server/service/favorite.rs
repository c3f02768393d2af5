//! Favorite characters and planets of a user.
//!
//! Every operation first checks that the owning user exists. Adding a favorite also checks
//! the referenced character or planet, so no link row is ever written for a missing record.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{
        CreateFavoriteCharacterDto, CreateFavoritePlanetDto, FavoriteCharacterDto,
        FavoritePlanetDto,
    },
    server::{
        data::{
            favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::{FavoriteCharacterModel, FavoritePlanetModel},
        service::{
            character::CharacterService, planet::PlanetService, user::UserService,
            validation::require,
        },
    },
};

impl From<FavoriteCharacterModel> for FavoriteCharacterDto {
    fn from(favorite: FavoriteCharacterModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
        }
    }
}

impl From<FavoritePlanetModel> for FavoritePlanetDto {
    fn from(favorite: FavoritePlanetModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_favorite_characters(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteCharacterDto>, Error> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let favorites = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteCharacterDto::from).collect())
    }

    /// Links a character to a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The created link
    /// - `Err(ResourceError::MissingField)` - `character_id` is missing from the body
    /// - `Err(ResourceError::NotFound)` - The user or the character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        payload: CreateFavoriteCharacterDto,
    ) -> Result<FavoriteCharacterDto, Error> {
        let character_id = require("character_id", payload.character_id)?;

        UserService::new(self.db).ensure_exists(user_id).await?;
        CharacterService::new(self.db)
            .ensure_exists(character_id)
            .await?;

        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await?;

        tracing::info!(
            user_id = %user_id,
            character_id = %character_id,
            "Added favorite character"
        );

        Ok(favorite.into())
    }

    /// Removes a favorite character link, which must belong to the provided user.
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        favorite_id: i32,
    ) -> Result<(), Error> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = FavoriteCharacterRepository::new(self.db);
        if repo.get_by_id_for_user(favorite_id, user_id).await?.is_none() {
            return Err(ResourceError::NotFound("Favorite character").into());
        }

        repo.delete(favorite_id).await?;

        tracing::info!(user_id = %user_id, favorite_id = %favorite_id, "Removed favorite character");

        Ok(())
    }

    pub async fn get_favorite_planets(&self, user_id: i32) -> Result<Vec<FavoritePlanetDto>, Error> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let favorites = FavoritePlanetRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoritePlanetDto::from).collect())
    }

    /// Links a planet to a user, see [`Self::add_favorite_character`] for the error cases.
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        payload: CreateFavoritePlanetDto,
    ) -> Result<FavoritePlanetDto, Error> {
        let planet_id = require("planet_id", payload.planet_id)?;

        UserService::new(self.db).ensure_exists(user_id).await?;
        PlanetService::new(self.db).ensure_exists(planet_id).await?;

        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;

        tracing::info!(user_id = %user_id, planet_id = %planet_id, "Added favorite planet");

        Ok(favorite.into())
    }

    pub async fn remove_favorite_planet(&self, user_id: i32, favorite_id: i32) -> Result<(), Error> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        let repo = FavoritePlanetRepository::new(self.db);
        if repo.get_by_id_for_user(favorite_id, user_id).await?.is_none() {
            return Err(ResourceError::NotFound("Favorite planet").into());
        }

        repo.delete(favorite_id).await?;

        tracing::info!(user_id = %user_id, favorite_id = %favorite_id, "Removed favorite planet");

        Ok(())
    }
}
