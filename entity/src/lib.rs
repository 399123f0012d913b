//! SeaORM entities for the skating club database.
//!
//! Each module maps one table. Enumerations shared by several tables live in
//! [`sea_orm_active_enums`] and are stored as text.

pub mod prelude;

pub mod attendance;
pub mod favorite;
pub mod meeting_point;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod sea_orm_active_enums;
pub mod user;
