use super::*;

/// Tests loading a route call with relations.
///
/// Verifies that only CONFIRMED attendances are counted.
///
/// Expected: Ok(Some) with confirmed_attendances = 1
#[tokio::test]
async fn counts_only_confirmed_attendances() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let confirmed = factory::user::create_user(db).await?;
    let cancelled = factory::user::create_user(db).await?;
    factory::attendance::create_attendance(db, route_call.id, confirmed.id).await?;
    factory::attendance::AttendanceFactory::new(db, route_call.id, cancelled.id)
        .status(entity::sea_orm_active_enums::AttendanceStatus::Cancelled)
        .build()
        .await?;

    let repo = RouteCallRepository::new(db);
    let loaded = repo.get_by_id(route_call.id).await?.unwrap();

    assert_eq!(loaded.confirmed_attendances, 1);
    assert_eq!(loaded.meeting_points.len(), 1);

    Ok(())
}

/// Tests loading a route call that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_route_call() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteCallRepository::new(db);

    assert!(repo.get_by_id(uuid::Uuid::new_v4()).await?.is_none());

    Ok(())
}
