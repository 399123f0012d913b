//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let route = factory::route::create_route(&db).await?;
//!
//! // Route call on a catalog route with organizer and PRIMARY meeting point
//! let (organizer, route, route_call) =
//!     factory::helpers::create_route_call_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `route` - Create catalog routes
//! - `route_call` - Create route calls and meeting points
//! - `attendance` - Create attendance records
//! - `review` - Create route reviews
//! - `favorite` - Create favorites
//! - `photo` - Create photos in any context and status
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attendance;
pub mod favorite;
pub mod helpers;
pub mod photo;
pub mod review;
pub mod route;
pub mod route_call;
pub mod user;

pub use attendance::create_attendance;
pub use favorite::create_favorite;
pub use photo::create_route_photo;
pub use review::create_review;
pub use route::create_route;
pub use route_call::{create_meeting_point, create_route_call};
pub use user::{create_admin, create_user};
