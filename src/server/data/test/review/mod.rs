use crate::server::{
    data::review::ReviewRepository,
    model::{
        page::PageRequest,
        review::{CreateReviewParams, UpdateReviewParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_route_paginated;
mod update;
