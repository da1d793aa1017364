//! Persistence interfaces and their two backends.
//!
//! Services only see the traits below. [`PgStore`] is the production backend;
//! [`MemoryStore`] keeps everything in process and backs `memory://`
//! deployments and the test suite.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{DictionaryEntry, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// The credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by an already-normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Returns the updated user, or `None` if the id is unknown.
    async fn update_full_name(&self, id: Uuid, full_name: &str) -> Result<Option<User>, StoreError>;
}

/// The dictionary store.
#[async_trait]
pub trait DictionaryStore: Send + Sync {
    /// Every entry, ordered by `inete` with byte-wise collation.
    async fn list_all(&self) -> Result<Vec<DictionaryEntry>, StoreError>;

    /// Newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError>;

    /// Case-insensitive lookup on the `inete` headword.
    async fn find_by_inete(&self, inete: &str) -> Result<Option<DictionaryEntry>, StoreError>;

    /// Fails with [`StoreError::Duplicate`] if an entry with the same
    /// lower-cased `inete` exists.
    async fn insert_entry(&self, entry: &DictionaryEntry) -> Result<(), StoreError>;
}

/// Free-text lookup over the three headwords.
///
/// Kept separate from [`DictionaryStore`] so the matching strategy can change
/// without touching the dictionary service.
#[async_trait]
pub trait WordSearch: Send + Sync {
    /// Entries where `query` occurs, ignoring case, as a literal substring of
    /// `inete`, `hiligaynon` or `english`. At most `limit` results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError>;
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> bool;

    async fn close(&self);
}
