use super::*;

/// Tests scheduling a route call with meeting points.
///
/// Verifies that the route call starts SCHEDULED, carries its organizer and route,
/// and lists the PRIMARY meeting point first even when given second.
///
/// Expected: Ok with 2 meeting points, PRIMARY first
#[tokio::test]
async fn creates_route_call_with_meeting_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let repo = RouteCallRepository::new(db);
    let route_call = repo
        .create(NewRouteCall {
            organizer_id: organizer.id,
            route_id: Some(route.id),
            title: route.name.clone(),
            description: Some("Bring lights".to_string()),
            image: route.image.clone(),
            date_route: Utc::now() + Duration::days(3),
            pace: RoutePace::Mariposa,
            meeting_points: vec![
                meeting_point(MeetingPointType::Secondary, "Parque Norte"),
                meeting_point(MeetingPointType::Primary, "Explanada"),
            ],
        })
        .await?;

    assert_eq!(route_call.status, RouteCallStatus::Scheduled);
    assert_eq!(route_call.organizer.id, organizer.id);
    assert_eq!(route_call.route.as_ref().map(|r| r.id), Some(route.id));
    assert_eq!(route_call.meeting_points.len(), 2);
    assert_eq!(route_call.meeting_points[0].point_type, MeetingPointType::Primary);
    assert_eq!(route_call.meeting_points[0].name, "Explanada");
    assert_eq!(route_call.confirmed_attendances, 0);

    Ok(())
}

/// Tests scheduling a custom route call.
///
/// Expected: Ok with no route attached
#[tokio::test]
async fn creates_custom_route_call() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;

    let repo = RouteCallRepository::new(db);
    let route_call = repo
        .create(NewRouteCall {
            organizer_id: organizer.id,
            route_id: None,
            title: "Night ride".to_string(),
            description: None,
            image: "https://images.example.com/night.jpg".to_string(),
            date_route: Utc::now() + Duration::days(1),
            pace: RoutePace::Gusano,
            meeting_points: vec![meeting_point(MeetingPointType::Primary, "Explanada")],
        })
        .await?;

    assert!(route_call.route.is_none());
    assert_eq!(route_call.title, "Night ride");

    Ok(())
}
