pub mod auth;
pub mod dictionary;
pub mod health;

use actix_web::web;

use crate::error::AppError;

/// Mounts every `/api` route. The root listing (`health::index`) is
/// registered separately, outside the scope.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health::health)
        .service(
            web::scope("/auth")
                .service(auth::signup)
                .service(auth::signin)
                .service(auth::update_profile),
        )
        .service(
            web::scope("/dictionary")
                .service(dictionary::list_words)
                .service(dictionary::search_words)
                .service(dictionary::recent_words)
                .service(dictionary::contribute_word)
                .service(dictionary::add_word),
        );
}

/// Unreadable JSON bodies become validation errors with the usual envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid query string: {}", err)).into()
    })
}
