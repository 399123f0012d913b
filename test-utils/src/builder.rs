use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Route, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Route)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Indexes declared on the entities, including composite `unique_key`s, created once
    /// every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus its index statements so unique keys hold as in production. Tables with foreign keys must be added after the tables they
    /// reference, since SQLite enforces foreign keys on these connections.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the tables backing the route catalog.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Route
    /// - Review
    /// - Favorite
    pub fn with_route_tables(self) -> Self {
        self.with_table(User)
            .with_table(Route)
            .with_table(Review)
            .with_table(Favorite)
    }

    /// Adds the tables required for route call operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Route
    /// - RouteCall
    /// - MeetingPoint
    /// - Attendance
    pub fn with_route_call_tables(self) -> Self {
        self.with_table(User)
            .with_table(Route)
            .with_table(RouteCall)
            .with_table(MeetingPoint)
            .with_table(Attendance)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this for service-level tests that touch several aggregates, such as the
    /// route detail view (reviews, photos, favorites) or photo uploads (route calls,
    /// attendances).
    pub fn with_all_tables(self) -> Self {
        self.with_route_call_tables()
            .with_table(Review)
            .with_table(Favorite)
            .with_table(Photo)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
