use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::{
            favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository, user::UserRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::UserModel,
        service::validation::{require, require_text},
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Service for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(ResourceError::MissingField)` - `email`, `password` or `is_active` is missing
    /// - `Err(ResourceError::EmailTaken)` - Another user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let email = require_text("email", payload.email)?;
        let password = require_text("password", payload.password)?;
        let is_active = require("is_active", payload.is_active)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(ResourceError::EmailTaken(email).into());
        }

        // Unique constraint still guards against a concurrent registration
        let user = match user_repo.create(email.clone(), password, is_active).await {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(ResourceError::EmailTaken(email).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user.into())
    }

    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(ResourceError::NotFound("User"))?;

        Ok(user.into())
    }

    /// Deletes a user together with all of their favorites in one transaction.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(ResourceError::NotFound("User").into());
        }

        let txn = self.db.begin().await?;

        let characters = FavoriteCharacterRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            favorite_characters = characters.rows_affected,
            favorite_planets = planets.rows_affected,
            "Deleted user"
        );

        Ok(())
    }

    /// Ensures a user exists, used by the favorite resources before any write.
    pub async fn ensure_exists(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ResourceError::NotFound("User").into()),
        }
    }
}
