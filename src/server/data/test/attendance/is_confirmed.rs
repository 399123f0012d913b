use super::*;

/// Tests checking whether a user attends a route call.
///
/// Expected: true for confirmed, false for cancelled or absent
#[tokio::test]
async fn reports_confirmed_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let attendee = factory::user::create_user(db).await?;
    let cancelled = factory::user::create_user(db).await?;
    factory::attendance::create_attendance(db, route_call.id, attendee.id).await?;
    factory::attendance::AttendanceFactory::new(db, route_call.id, cancelled.id)
        .status(AttendanceStatus::Cancelled)
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);

    assert!(repo.is_confirmed(route_call.id, attendee.id).await?);
    assert!(!repo.is_confirmed(route_call.id, cancelled.id).await?);
    assert!(!repo.is_confirmed(route_call.id, organizer.id).await?);

    Ok(())
}
