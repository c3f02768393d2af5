use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// Holds the database handle handlers pass down to services and repositories; there is no
/// other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
