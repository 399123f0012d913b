use super::*;

/// Tests confirming attendance.
///
/// Expected: Ok with CONFIRMED attendance carrying the user
#[tokio::test]
async fn creates_confirmed_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = AttendanceRepository::new(db);
    let attendance = repo.create(route_call.id, user.id).await?;

    assert_eq!(attendance.status, AttendanceStatus::Confirmed);
    assert_eq!(attendance.user.id, user.id);
    assert_eq!(repo.count_by_route_call(route_call.id).await?, 1);

    Ok(())
}

/// Tests that a user holds at most one attendance row per route call.
///
/// Expected: Err from the unique key on (route call, user)
#[tokio::test]
async fn fails_for_second_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::attendance::AttendanceFactory::new(db, route_call.id, user.id)
        .status(AttendanceStatus::Cancelled)
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);

    assert!(repo.create(route_call.id, user.id).await.is_err());

    Ok(())
}

/// Tests switching an attendance between statuses.
///
/// Expected: Ok with status CANCELLED then CONFIRMED on the same row
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    let attendance = factory::attendance::create_attendance(db, route_call.id, user.id).await?;

    let repo = AttendanceRepository::new(db);
    let cancelled = repo
        .set_status(attendance.id, AttendanceStatus::Cancelled)
        .await?;
    let confirmed = repo
        .set_status(attendance.id, AttendanceStatus::Confirmed)
        .await?;

    assert_eq!(cancelled.status, AttendanceStatus::Cancelled);
    assert_eq!(confirmed.id, attendance.id);
    assert_eq!(confirmed.status, AttendanceStatus::Confirmed);

    Ok(())
}
