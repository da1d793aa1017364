use std::sync::Arc;

use super::{ContributionResponse, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT, SEARCH_LIMIT};
use crate::error::{AppError, StoreError};
use crate::models::{ContributionRequest, DictionaryEntry, NewEntry};
use crate::store::{DictionaryStore, WordSearch};

const WORD_EXISTS: &str = "This word already exists in the dictionary";

/// Dictionary operations over an entry store and a search backend.
#[derive(Clone)]
pub struct DictionaryService {
    entries: Arc<dyn DictionaryStore>,
    search: Arc<dyn WordSearch>,
}

impl DictionaryService {
    pub fn new(entries: Arc<dyn DictionaryStore>, search: Arc<dyn WordSearch>) -> Self {
        Self { entries, search }
    }

    pub async fn list_all(&self) -> Result<Vec<DictionaryEntry>, AppError> {
        self.entries
            .list_all()
            .await
            .map_err(AppError::store("Error fetching dictionary"))
    }

    /// A blank query yields no results rather than the whole dictionary.
    pub async fn search(&self, query: &str) -> Result<Vec<DictionaryEntry>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.search
            .search(query, SEARCH_LIMIT)
            .await
            .map_err(AppError::store("Search error"))
    }

    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<DictionaryEntry>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);
        self.entries
            .recent(limit)
            .await
            .map_err(AppError::store("Error fetching recent words"))
    }

    /// Administrative insert: stores the payload as sent, with only the
    /// store's own uniqueness rule applied.
    pub async fn add_word(&self, new_entry: NewEntry) -> Result<DictionaryEntry, AppError> {
        let entry = new_entry.into_entry();
        self.insert(&entry, "Error adding word").await?;
        log::info!("Word added: {}", entry.inete);
        Ok(entry)
    }

    pub async fn contribute(&self, request: ContributionRequest) -> Result<ContributionResponse, AppError> {
        let entry = request.into_entry().map_err(|_| {
            AppError::Validation("Inete, Hiligaynon, and English words are required".into())
        })?;

        let existing = self
            .entries
            .find_by_inete(&entry.inete)
            .await
            .map_err(AppError::store("Error contributing word"))?;
        if existing.is_some() {
            return Err(AppError::Conflict(WORD_EXISTS.into()));
        }

        self.insert(&entry, "Error contributing word").await?;
        log::info!(
            "Word contributed: {} by {}",
            entry.inete,
            entry.contributor_name.as_deref().unwrap_or_default()
        );

        Ok(ContributionResponse {
            message: "Word contributed successfully".into(),
            word: entry,
        })
    }

    async fn insert(&self, entry: &DictionaryEntry, context: &'static str) -> Result<(), AppError> {
        match self.entries.insert_entry(entry).await {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate(_)) => Err(AppError::Conflict(WORD_EXISTS.into())),
            Err(e) => Err(AppError::store(context)(e)),
        }
    }
}
