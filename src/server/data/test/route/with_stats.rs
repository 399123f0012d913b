use super::*;

/// Tests attaching the mean rating to routes.
///
/// Verifies that the mean is rounded to one decimal and that routes without
/// reviews report 0 while keeping the input order.
///
/// Expected: Ok with averages [4.3, 0.0]
#[tokio::test]
async fn attaches_average_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewed = factory::route::create_route(db).await?;
    let unreviewed = factory::route::create_route(db).await?;
    for rating in [4, 4, 5] {
        let user = factory::user::create_user(db).await?;
        factory::review::create_review(db, user.id, reviewed.id, rating).await?;
    }

    let repo = RouteRepository::new(db);
    let routes = vec![
        repo.find_by_id(reviewed.id).await?.unwrap(),
        repo.find_by_id(unreviewed.id).await?.unwrap(),
    ];
    let stats = repo.with_stats(routes).await?;

    assert_eq!(stats[0].route.id, reviewed.id);
    assert_eq!(stats[0].average_rating, 4.3);
    assert_eq!(stats[0].counts.reviews, 3);
    assert_eq!(stats[1].average_rating, 0.0);

    Ok(())
}
