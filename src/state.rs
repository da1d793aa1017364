use std::sync::Arc;

use crate::auth::{AuthService, TokenIssuer};
use crate::config::Config;
use crate::dictionary::DictionaryService;
use crate::error::StoreError;
use crate::store::{DictionaryStore, MemoryStore, PgStore, StoreHealth, UserStore, WordSearch};

/// Process-wide state built once at startup and shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub dictionary: DictionaryService,
    pub store: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Builds the services over the store selected by `config.database_url`.
    ///
    /// An unreachable database is logged and left to the health endpoint to
    /// report; only a malformed connection string is an error here.
    pub async fn init(config: &Config) -> Result<Self, StoreError> {
        if config.uses_memory_store() {
            log::info!("Using the in-memory store; data is lost on restart");
            return Ok(Self::in_memory(config));
        }

        let store = Arc::new(PgStore::connect_lazy(&config.database_url)?);
        match store.migrate().await {
            Ok(()) => log::info!("Connected to database"),
            Err(e) => log::error!("Database connection error: {}", e),
        }
        Ok(Self::from_store(store, config))
    }

    pub fn in_memory(config: &Config) -> Self {
        Self::from_store(Arc::new(MemoryStore::new()), config)
    }

    pub fn from_store<S>(store: Arc<S>, config: &Config) -> Self
    where
        S: UserStore + DictionaryStore + WordSearch + StoreHealth + 'static,
    {
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl_days);
        Self {
            auth: AuthService::new(
                store.clone(),
                tokens,
                config.bcrypt_cost,
                config.verify_profile_token,
            ),
            dictionary: DictionaryService::new(store.clone(), store.clone()),
            store,
        }
    }
}
