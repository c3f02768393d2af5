//! Test scaffolding for holocron.
//!
//! Tests declare the tables and fixtures they need with [`TestBuilder`], then work against
//! the in-memory SQLite database held by the resulting [`TestContext`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestBuilder, TestContext, TestError};
}

/// Creates a [`TestContext`] with tables for the given entities.
///
/// With no arguments every holocron table is created.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().with_all_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
