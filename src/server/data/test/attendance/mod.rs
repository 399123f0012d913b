use crate::server::data::attendance::AttendanceRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_confirmed_by_route_call;
mod get_confirmed_by_user;
mod is_confirmed;
