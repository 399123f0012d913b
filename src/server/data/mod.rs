//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod attendance;
pub mod favorite;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod user;

#[cfg(test)]
mod test;

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select,
};
use uuid::Uuid;

/// Counts rows of `query` grouped by a foreign key column.
///
/// Rows whose column is NULL are ignored. Ids without rows are absent from the map.
///
/// # Arguments
/// - `db` - Connection or transaction to run the query on
/// - `query` - Base select, possibly already filtered
/// - `column` - Foreign key column to group by
pub(crate) async fn grouped_counts<E, C>(
    db: &impl ConnectionTrait,
    query: Select<E>,
    column: C,
) -> Result<HashMap<Uuid, u64>, DbErr>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let rows: Vec<(Option<Uuid>, i64)> = query
        .select_only()
        .column(column)
        .column_as(column.count(), "count")
        .group_by(column)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(id, count)| id.map(|id| (id, count.max(0) as u64)))
        .collect())
}

/// Unwraps a related model loaded through `find_also_related`.
///
/// Foreign keys guarantee the related row exists, so a missing one means the database is
/// inconsistent and is reported as `RecordNotFound`.
pub(crate) fn require_related<T>(related: Option<T>, what: &str, owner: Uuid) -> Result<T, DbErr> {
    related.ok_or_else(|| DbErr::RecordNotFound(format!("{} of {} not found", what, owner)))
}
