use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with a placeholder password
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user_with(email, "password", true).await
    }

    pub async fn insert_user_with(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
