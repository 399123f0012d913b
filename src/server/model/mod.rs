//! Domain models and operation parameters used between the service and data layers.
//!
//! Repositories convert SeaORM entity models into these types with `from_entity`, and
//! controllers convert them into API DTOs with `into_dto`. Parameter types (`Create*Params`,
//! `Update*Params`, filters) carry validated request data into services.

pub mod attendance;
pub mod favorite;
pub mod page;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod user;
