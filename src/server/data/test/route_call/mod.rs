use crate::server::{
    data::route_call::RouteCallRepository,
    model::{
        page::{PageRequest, MAX_PAGE},
        route_call::{
            CreateMeetingPointParams, NewRouteCall, RouteCallFilter, UpdateRouteCallParams,
        },
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MeetingPointType, RouteCallStatus, RoutePace};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;

fn meeting_point(point_type: MeetingPointType, name: &str) -> CreateMeetingPointParams {
    CreateMeetingPointParams {
        point_type,
        name: name.to_string(),
        custom_name: None,
        location: None,
        time: None,
    }
}
