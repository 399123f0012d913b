//! Service tests and the in-memory stand-ins for external services they run against.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{
    AttendanceStatus, MeetingPointType, PhotoContext, PhotoStatus, RouteCallStatus, RoutePace,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{storage::StorageError, AppError},
    model::user::{CreateUserParams, User},
    service::{identity::IdentityProvider, storage::PhotoStorage},
};

mod favorite;
mod route;

/// Identity provider answering from a fixed set of profiles.
pub(crate) struct FakeIdentityProvider {
    profiles: HashMap<String, CreateUserParams>,
    calls: AtomicUsize,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_profile(mut self, clerk_id: &str, email: &str) -> Self {
        self.profiles.insert(
            clerk_id.to_string(),
            CreateUserParams {
                clerk_id: clerk_id.to_string(),
                email: email.to_string(),
                name: Some("Skater".to_string()),
                last_name: None,
                image_url: None,
            },
        );
        self
    }

    /// Number of profile lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn fetch_user(&self, clerk_id: &str) -> Result<CreateUserParams, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(clerk_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Identity {} not found", clerk_id)))
    }
}

pub(crate) const STORAGE_URL: &str = "https://storage.test/photos/";

/// Object storage keeping files in memory.
pub(crate) struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_deletes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_deletes: false,
        }
    }

    /// Storage whose deletions always fail.
    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::new()
        }
    }

    /// Stores an object directly and returns its public URL.
    pub fn seed(&self, path: &str) -> String {
        self.objects
            .lock()
            .unwrap()
            .insert(path.to_string(), vec![1]);
        format!("{}{}", STORAGE_URL, path)
    }

    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn contains_url(&self, url: &str) -> bool {
        url.strip_prefix(STORAGE_URL)
            .is_some_and(|path| self.objects.lock().unwrap().contains_key(path))
    }
}

#[async_trait]
impl PhotoStorage for MemoryStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects.lock().unwrap().insert(path.to_string(), bytes);
        Ok(format!("{}{}", STORAGE_URL, path))
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        let Some(path) = public_url.strip_prefix(STORAGE_URL) else {
            return Ok(());
        };
        if self.fail_deletes {
            return Err(StorageError::Rejected {
                path: path.to_string(),
                status: 500,
                body: "unavailable".to_string(),
            });
        }
        self.objects.lock().unwrap().remove(path);
        Ok(())
    }
}

/// Loads the domain user behind a factory-created row.
async fn load_user(db: &DatabaseConnection, entity: &entity::user::Model) -> User {
    UserRepository::new(db)
        .find_by_clerk_id(&entity.clerk_id)
        .await
        .unwrap()
        .unwrap()
}
