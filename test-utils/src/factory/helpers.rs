//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifiers (slugs, external ids) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a route call on a catalog route together with its organizer.
///
/// This is a convenience method that creates:
/// 1. User (as organizer)
/// 2. Route
/// 3. RouteCall scheduled two days ahead with a PRIMARY meeting point
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((organizer, route, route_call))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_call_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::route::Model,
        entity::route_call::Model,
    ),
    DbErr,
> {
    let organizer = crate::factory::user::create_user(db).await?;
    let route = crate::factory::route::create_route(db).await?;
    let route_call = crate::factory::route_call::RouteCallFactory::new(db, organizer.id)
        .route(&route)
        .build()
        .await?;
    crate::factory::route_call::create_meeting_point(
        db,
        route_call.id,
        entity::sea_orm_active_enums::MeetingPointType::Primary,
    )
    .await?;

    Ok((organizer, route, route_call))
}
