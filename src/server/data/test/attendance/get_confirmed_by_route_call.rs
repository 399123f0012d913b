use super::*;

/// Tests listing attendees of a route call.
///
/// Verifies that cancelled attendances and attendances of other route calls are
/// left out.
///
/// Expected: Ok with the two confirmed attendees
#[tokio::test]
async fn returns_confirmed_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let other_call = factory::route_call::create_route_call(db, organizer.id).await?;

    for _ in 0..2 {
        let user = factory::user::create_user(db).await?;
        factory::attendance::create_attendance(db, route_call.id, user.id).await?;
    }
    let cancelled = factory::user::create_user(db).await?;
    factory::attendance::AttendanceFactory::new(db, route_call.id, cancelled.id)
        .status(AttendanceStatus::Cancelled)
        .build()
        .await?;
    factory::attendance::create_attendance(db, other_call.id, cancelled.id).await?;

    let repo = AttendanceRepository::new(db);
    let attendances = repo.get_confirmed_by_route_call(route_call.id).await?;

    assert_eq!(attendances.len(), 2);
    assert!(attendances
        .iter()
        .all(|a| a.status == AttendanceStatus::Confirmed && a.route_call_id == route_call.id));
    assert_eq!(repo.count_by_route_call(route_call.id).await?, 3);

    Ok(())
}
