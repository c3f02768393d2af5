//! Declarative test setup.
//!
//! Configuration calls are queued on the builder and executed in order by
//! [`TestBuilder::build`]: tables first, then fixtures.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<String>,
    characters: Vec<String>,
    planets: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Create every holocron table: users, characters, planets and both favorite tables.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active user with the given email, IDs are assigned in call order from 1.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a character with the given name and no attributes.
    pub fn with_character(mut self, name: &str) -> Self {
        self.characters.push(name.to_string());
        self
    }

    /// Insert a planet with the given name and no attributes.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.characters {
            setup.character().insert_character(&name).await?;
        }

        for name in self.planets {
            setup.planet().insert_planet(&name).await?;
        }

        Ok(setup)
    }
}
