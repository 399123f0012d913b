use super::*;

/// Tests the upcoming listing.
///
/// Verifies that upcoming route calls exclude past and cancelled ones and are
/// sorted soonest first.
///
/// Expected: Ok with the two future SCHEDULED calls, soonest first
#[tokio::test]
async fn lists_upcoming_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    let later = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(5))
        .build()
        .await?;
    let sooner = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(1))
        .build()
        .await?;
    factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(2))
        .status(RouteCallStatus::Cancelled)
        .build()
        .await?;

    let repo = RouteCallRepository::new(db);
    let page = repo
        .get_paginated(
            RouteCallFilter {
                upcoming: Some(true),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    let ids: Vec<_> = page.items.iter().map(|rc| rc.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
    assert_eq!(page.total_items, 2);

    Ok(())
}

/// Tests the past listing.
///
/// Verifies that past listings include calls dated before now and closed calls,
/// most recent first.
///
/// Expected: Ok with the cancelled future call first, then the past call
#[tokio::test]
async fn lists_past_and_closed_most_recent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(3))
        .build()
        .await?;
    let past = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let cancelled = factory::route_call::RouteCallFactory::new(db, organizer.id)
        .date_route(Utc::now() + Duration::days(1))
        .status(RouteCallStatus::Cancelled)
        .build()
        .await?;

    let repo = RouteCallRepository::new(db);
    let page = repo
        .get_paginated(
            RouteCallFilter {
                upcoming: Some(false),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    let ids: Vec<_> = page.items.iter().map(|rc| rc.id).collect();
    assert_eq!(ids, vec![cancelled.id, past.id]);

    Ok(())
}

/// Tests filtering by organizer and route.
///
/// Expected: Ok with only the matching route call
#[tokio::test]
async fn filters_by_organizer_and_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    factory::route_call::create_route_call(db, organizer.id).await?;
    let other = factory::user::create_user(db).await?;
    factory::route_call::RouteCallFactory::new(db, other.id)
        .route(&route)
        .build()
        .await?;

    let repo = RouteCallRepository::new(db);
    let page = repo
        .get_paginated(
            RouteCallFilter {
                organizer_id: Some(organizer.id),
                route_id: Some(route.id),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, route_call.id);
    assert_eq!(page.items[0].meeting_points.len(), 1);

    Ok(())
}

/// Tests requesting a page number far beyond the last page.
///
/// Verifies that the largest possible page number is capped instead of overflowing the
/// paginator offset.
///
/// Expected: Ok with an empty page and the real totals
#[tokio::test]
async fn caps_huge_page_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_user(db).await?;
    factory::route_call::create_route_call(db, organizer.id).await?;

    let page = RouteCallRepository::new(db)
        .get_paginated(
            RouteCallFilter::default(),
            PageRequest::new(Some(u64::MAX), Some(100)),
        )
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 1);
    assert_eq!(page.request.page, MAX_PAGE);

    Ok(())
}
