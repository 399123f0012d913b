//! HTTP handlers.
//!
//! Controllers authenticate through `AuthGuard`, convert DTOs into domain parameters, call a
//! service and wrap the result in the `ApiResponse` envelope.

pub mod attendance;
pub mod auth;
pub mod config;
pub mod favorite;
pub mod health;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
