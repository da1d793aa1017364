use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DictionaryStore, StoreHealth, UserStore, WordSearch};
use crate::error::StoreError;
use crate::models::entry::inete_key;
use crate::models::{DictionaryEntry, User};

/// In-process store. Entries are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    entries: RwLock<Vec<DictionaryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let email = user.email.to_lowercase();
        if users.iter().any(|u| u.email.to_lowercase() == email) {
            return Err(StoreError::Duplicate("users_email_key".into()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.last_login = Some(at);
        }
        Ok(())
    }

    async fn update_full_name(&self, id: Uuid, full_name: &str) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.full_name = full_name.to_string();
            user.clone()
        }))
    }
}

#[async_trait]
impl DictionaryStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        let mut all = self.entries.read().await.clone();
        all.sort_by(|a, b| a.inete.cmp(&b.inete));
        Ok(all)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError> {
        let entries = self.entries.read().await;
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut newest: Vec<DictionaryEntry> = entries.iter().rev().cloned().collect();
        newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        newest.truncate(limit);
        Ok(newest)
    }

    async fn find_by_inete(&self, inete: &str) -> Result<Option<DictionaryEntry>, StoreError> {
        let key = inete_key(inete);
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.inete_key() == key).cloned())
    }

    async fn insert_entry(&self, entry: &DictionaryEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let key = entry.inete_key();
        if entries.iter().any(|e| e.inete_key() == key) {
            return Err(StoreError::Duplicate("dictionary_entries_inete_key".into()));
        }
        entries.push(entry.clone());
        Ok(())
    }
}

#[async_trait]
impl WordSearch for MemoryStore {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError> {
        let matcher = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::InvalidQuery(e.to_string()))?;

        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| {
                matcher.is_match(&e.inete)
                    || matcher.is_match(&e.hiligaynon)
                    || matcher.is_match(&e.english)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }

    async fn close(&self) {}
}
