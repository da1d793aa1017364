#![doc = "The `inetelearn` library crate."]
#![doc = ""]
#![doc = "Account handling, the multilingual dictionary, the persistence backends,"]
#![doc = "routing and error handling for the IneteLearn API. The binary (`main.rs`)"]
#![doc = "only loads configuration, builds the shared state and runs the server."]

pub mod auth;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::config::Config;
pub use crate::error::{AppError, StoreError};
pub use crate::state::AppState;
