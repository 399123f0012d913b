pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_users_table;
mod m20261018_000002_create_routes_table;
mod m20261018_000003_create_route_calls_table;
mod m20261018_000004_create_meeting_points_table;
mod m20261018_000005_create_attendances_table;
mod m20261018_000006_create_reviews_table;
mod m20261018_000007_create_favorites_table;
mod m20261018_000008_create_photos_table;
mod m20261018_000009_seed_routes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_users_table::Migration),
            Box::new(m20261018_000002_create_routes_table::Migration),
            Box::new(m20261018_000003_create_route_calls_table::Migration),
            Box::new(m20261018_000004_create_meeting_points_table::Migration),
            Box::new(m20261018_000005_create_attendances_table::Migration),
            Box::new(m20261018_000006_create_reviews_table::Migration),
            Box::new(m20261018_000007_create_favorites_table::Migration),
            Box::new(m20261018_000008_create_photos_table::Migration),
            Box::new(m20261018_000009_seed_routes::Migration),
        ]
    }
}
