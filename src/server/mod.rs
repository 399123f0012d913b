//! Skating club backend: catalog routes, group outings, reviews, favorites and the photo gallery.
//!
//! Requests enter through `router`, are authenticated by the guard in `middleware` (Clerk
//! session tokens, with the local user row created on first sight) and are handled by a
//! `controller`. Controllers turn request DTOs into domain parameters and call a `service`,
//! which enforces ownership and lifecycle rules and talks to the `data` repositories.
//! Repositories return the domain types in `model`; controllers map them back to DTOs.
//!
//! `config`, `startup` and `state` wire the process together: environment variables, the
//! database with its migrations, and the shared Clerk and Supabase Storage clients.
//! `error` maps every failure to the JSON error envelope.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
