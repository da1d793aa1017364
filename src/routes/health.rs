use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

/// Health check endpoint
///
/// Always answers 200; `database` tells whether the store is reachable.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    let database = if state.store.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "IneteLearn API is running",
        "timestamp": Utc::now(),
        "database": database,
    }))
}

/// Lists the available routes.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "IneteLearn API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "signup": "POST /api/auth/signup",
            "signin": "POST /api/auth/signin",
            "updateProfile": "PUT /api/auth/update-profile",
            "dictionary": "GET /api/dictionary",
            "search": "GET /api/dictionary/search?query=",
            "recent": "GET /api/dictionary/recent",
            "addWord": "POST /api/dictionary",
            "contribute": "POST /api/dictionary/contribute",
        }
    }))
}
