//! API data transfer objects shared by the HTTP controllers and the OpenAPI document.

pub mod api;
pub mod attendance;
pub mod config;
pub mod favorite;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod user;
