use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use super::{DictionaryStore, StoreHealth, UserStore, WordSearch};
use crate::error::StoreError;
use crate::models::{DictionaryEntry, User};

const USER_COLUMNS: &str = "id, full_name, email, password_hash, created_at, last_login";

const ENTRY_COLUMNS: &str = "id, inete, hiligaynon, english, pronunciation, part_of_speech, \
     definition_inete, definition_hiligaynon, definition_english, \
     example_inete, example_hiligaynon, example_english, \
     contributor_name, contributor_email, category, audio_url, created_at";

/// Postgres-backed store. Uniqueness of emails and `inete` headwords is
/// enforced by the indexes in `migrations/`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates the pool without touching the network; connections are opened
    /// on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

/// Escapes `LIKE` wildcards so the query matches as a literal substring.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {} FROM users WHERE lower(email) = lower($1)", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, full_name, email, password_hash, created_at, last_login)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.last_login)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_full_name(&self, id: Uuid, full_name: &str) -> Result<Option<User>, StoreError> {
        let sql = format!(
            "UPDATE users SET full_name = $1 WHERE id = $2 RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(full_name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl DictionaryStore for PgStore {
    async fn list_all(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        let sql = format!(
            "SELECT {} FROM dictionary_entries ORDER BY inete COLLATE \"C\" ASC",
            ENTRY_COLUMNS
        );
        let entries = sqlx::query_as::<_, DictionaryEntry>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError> {
        let sql = format!(
            "SELECT {} FROM dictionary_entries ORDER BY created_at DESC LIMIT $1",
            ENTRY_COLUMNS
        );
        let entries = sqlx::query_as::<_, DictionaryEntry>(&sql)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn find_by_inete(&self, inete: &str) -> Result<Option<DictionaryEntry>, StoreError> {
        let sql = format!(
            "SELECT {} FROM dictionary_entries WHERE lower(btrim(inete)) = lower(btrim($1)) LIMIT 1",
            ENTRY_COLUMNS
        );
        let entry = sqlx::query_as::<_, DictionaryEntry>(&sql)
            .bind(inete)
            .fetch_optional(&self.pool)
            .await?;
        Ok(entry)
    }

    async fn insert_entry(&self, entry: &DictionaryEntry) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO dictionary_entries ({})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
            ENTRY_COLUMNS
        );
        sqlx::query(&sql)
            .bind(entry.id)
            .bind(&entry.inete)
            .bind(&entry.hiligaynon)
            .bind(&entry.english)
            .bind(&entry.pronunciation)
            .bind(&entry.part_of_speech)
            .bind(&entry.definition_inete)
            .bind(&entry.definition_hiligaynon)
            .bind(&entry.definition_english)
            .bind(&entry.example_inete)
            .bind(&entry.example_hiligaynon)
            .bind(&entry.example_english)
            .bind(&entry.contributor_name)
            .bind(&entry.contributor_email)
            .bind(&entry.category)
            .bind(&entry.audio_url)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl WordSearch for PgStore {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<DictionaryEntry>, StoreError> {
        let sql = format!(
            "SELECT {} FROM dictionary_entries
             WHERE inete ILIKE $1 OR hiligaynon ILIKE $1 OR english ILIKE $1
             LIMIT $2",
            ENTRY_COLUMNS
        );
        let entries = sqlx::query_as::<_, DictionaryEntry>(&sql)
            .bind(like_pattern(query))
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Database ping failed: {}", e);
                false
            }
        }
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
