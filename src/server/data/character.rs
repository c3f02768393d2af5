use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// # Arguments
    /// - `name`: Display name of the character
    /// - `url`: Reference URL for the character
    /// - `attributes`: JSON object of additional string attributes
    pub async fn create(
        &self,
        name: String,
        url: String,
        attributes: serde_json::Value,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            url: ActiveValue::Set(url),
            attributes: ActiveValue::Set(attributes),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of character existing, check [`DeleteResult::rows_affected`]
    /// to confirm the deletion.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
