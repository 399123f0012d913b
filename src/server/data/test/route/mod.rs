use crate::server::data::route::RouteRepository;
use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_slug;
mod get_all;
mod get_counts;
mod with_stats;
