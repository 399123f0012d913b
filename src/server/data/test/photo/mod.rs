use crate::server::{
    data::photo::PhotoRepository,
    model::{
        page::PageRequest,
        photo::{CreatePhotoParams, PhotoFilter},
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::photo::PhotoFactory};

mod create;
mod find_active_cover;
mod get_by_user;
mod get_paginated;
mod get_pending_review;
mod moderate;
