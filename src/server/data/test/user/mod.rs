use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_clerk_id;
mod find_by_ids;
mod upsert;
