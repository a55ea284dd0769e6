use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::library::extract_records;
use crate::models::{UserProfile, UserRecord};

// 1. UserDirectory Contract

/// UserDirectory
///
/// Abstract contract for credential lookup. Handlers depend on this trait
/// rather than a concrete source, so the JSON-file directory used in
/// deployment and the in-memory mock used in tests are interchangeable.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn UserDirectory>`) shareable across Axum's task boundaries.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Verifies a username/password pair, returning the public profile on
    /// success and `None` on unknown user or wrong password alike. Callers
    /// must not be able to distinguish the two cases.
    async fn authenticate(&self, username: &str, password: &str) -> Option<UserProfile>;

    /// Number of loaded records, surfaced in the startup log.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// DirectoryState
///
/// The concrete type used to share directory access across the application
/// state.
pub type DirectoryState = Arc<dyn UserDirectory>;

// 2. The JSON-file Implementation

/// JsonFileDirectory
///
/// User records read once at startup from a JSON document, with the same
/// shape tolerance as the game library (`{ "data": [...] }` or a bare
/// array). Unreadable files and undecodable entries shrink the directory
/// instead of aborting startup; an empty directory simply means every login
/// fails.
pub struct JsonFileDirectory {
    users: HashMap<String, UserRecord>,
}

impl JsonFileDirectory {
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let records = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(document) => extract_records(document),
                Err(err) => {
                    tracing::error!(path = %path.display(), "failed to parse user directory: {err}");
                    Vec::new()
                }
            },
            Err(err) => {
                tracing::error!(path = %path.display(), "failed to read user directory: {err}");
                Vec::new()
            }
        };

        let mut users = HashMap::new();
        for record in records {
            match serde_json::from_value::<UserRecord>(record) {
                Ok(user) => {
                    users.insert(user.username.clone(), user);
                }
                Err(err) => {
                    tracing::warn!("skipping undecodable user record: {err}");
                }
            }
        }
        Self { users }
    }

    /// Directory built from already-materialized records. Test seam.
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for JsonFileDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Option<UserProfile> {
        self.users
            .get(username)
            .filter(|record| record.password == password)
            .map(UserRecord::profile)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

// 3. The Mock Implementation (For Tests)

/// MockUserDirectory
///
/// Single-user in-memory directory used by handler and API tests, so auth
/// flows can be exercised without seeding files on disk.
pub struct MockUserDirectory {
    profile: UserProfile,
    password: String,
}

impl MockUserDirectory {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            profile: UserProfile {
                id: uuid::Uuid::new_v4(),
                username: username.to_string(),
                display_name: username.to_string(),
            },
            password: password.to_string(),
        }
    }

    /// The profile `authenticate` hands out, for assertions.
    pub fn profile(&self) -> UserProfile {
        self.profile.clone()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Option<UserProfile> {
        if username == self.profile.username && password == self.password {
            Some(self.profile.clone())
        } else {
            None
        }
    }

    fn len(&self) -> usize {
        1
    }
}
