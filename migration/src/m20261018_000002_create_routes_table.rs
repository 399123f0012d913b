use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(pk_uuid(Route::Id))
                    .col(string(Route::Name))
                    .col(string_uniq(Route::Slug))
                    .col(string(Route::Image))
                    .col(string(Route::ApproximateDistance))
                    .col(text(Route::Description))
                    .col(string_null(Route::MapEmbedUrl))
                    .col(string_null(Route::GpxFileUrl))
                    .col(json_binary(Route::Level))
                    .col(
                        timestamp_with_time_zone(Route::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Route::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Route {
    #[sea_orm(iden = "routes")]
    Table,
    Id,
    Name,
    Slug,
    Image,
    ApproximateDistance,
    Description,
    MapEmbedUrl,
    GpxFileUrl,
    Level,
    CreatedAt,
    UpdatedAt,
}
