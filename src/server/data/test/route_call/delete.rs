use super::*;

/// Tests deleting a route call.
///
/// Verifies that its meeting points are removed along with it.
///
/// Expected: Ok with no route call and no meeting points left
#[tokio::test]
async fn deletes_route_call_and_meeting_points() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;

    let repo = RouteCallRepository::new(db);
    repo.delete(route_call.id).await?;

    assert!(repo.find_by_id(route_call.id).await?.is_none());
    let points = entity::prelude::MeetingPoint::find()
        .filter(entity::meeting_point::Column::RouteCallId.eq(route_call.id))
        .count(db)
        .await?;
    assert_eq!(points, 0);

    Ok(())
}
