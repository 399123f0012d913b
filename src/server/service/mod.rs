//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, lifecycle rules and duplicate detection
//! - **Orchestration**: Coordinating repositories with the identity provider and photo storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! External services are reached through the `IdentityProvider` and `PhotoStorage` traits so
//! that tests can swap them for in-memory fakes.

pub mod attendance;
pub mod catalog;
pub mod favorite;
pub mod identity;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod storage;
pub mod token;
pub mod user_sync;

#[cfg(test)]
pub(crate) mod test;
