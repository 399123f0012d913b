use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Database of a single test.
///
/// Each context owns its own in-memory SQLite database, so tests never see each other's rows.
/// The connection is opened on first use.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening `sqlite::memory:` the first time.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the schema statements in order. Parents must come before the tables that
    /// reference them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}
