use super::*;

/// Tests listing a user's attendances.
///
/// Verifies that route calls come back by date ascending with their relations and
/// that cancelled attendances are skipped.
///
/// Expected: Ok with two attendances, earliest route call first
#[tokio::test]
async fn returns_attendances_by_route_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let later = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(10))
        .build()
        .await?;
    let sooner = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let skipped = factory::route_call::create_route_call(db, organizer.id).await?;

    factory::attendance::create_attendance(db, later.id, user.id).await?;
    factory::attendance::create_attendance(db, sooner.id, user.id).await?;
    factory::attendance::AttendanceFactory::new(db, skipped.id, user.id)
        .status(AttendanceStatus::Cancelled)
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let attendances = repo.get_confirmed_by_user(user.id).await?;

    assert_eq!(attendances.len(), 2);
    assert_eq!(attendances[0].route_call.id, sooner.id);
    assert_eq!(attendances[1].route_call.id, later.id);
    assert_eq!(attendances[0].route_call.organizer.id, organizer.id);
    assert_eq!(attendances[0].route_call.confirmed_attendances, 1);

    Ok(())
}
