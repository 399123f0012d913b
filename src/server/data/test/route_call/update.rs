use super::*;

/// Tests a partial route call update.
///
/// Expected: Ok with new title and pace, date unchanged
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    let route_call = factory::route_call::create_route_call(db, organizer.id).await?;

    let repo = RouteCallRepository::new(db);
    let updated = repo
        .update(
            route_call.id,
            UpdateRouteCallParams {
                title: Some("Sunday loop".to_string()),
                pace: Some(RoutePace::LocuraTotal),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Sunday loop");
    assert_eq!(updated.pace, RoutePace::LocuraTotal);
    assert_eq!(
        updated.date_route.timestamp(),
        route_call.date_route.timestamp()
    );

    Ok(())
}

/// Tests changing the status of a route call.
///
/// Expected: Ok with status CANCELLED
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    let route_call = factory::route_call::create_route_call(db, organizer.id).await?;

    let repo = RouteCallRepository::new(db);
    let cancelled = repo
        .set_status(route_call.id, RouteCallStatus::Cancelled)
        .await?;

    assert_eq!(cancelled.status, RouteCallStatus::Cancelled);

    Ok(())
}
