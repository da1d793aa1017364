use crate::{
    dictionary::{RecentQuery, SearchQuery},
    error::AppError,
    models::{ContributionRequest, NewEntry},
    state::AppState,
};
use actix_web::{get, post, web, HttpResponse, Responder};

/// Every entry, ordered by the `inete` headword.
#[get("")]
pub async fn list_words(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let words = state.dictionary.list_all().await?;
    Ok(HttpResponse::Ok().json(words))
}

/// Substring search over the three headwords.
///
/// ## Query Parameters:
/// - `query`: Text to look for, case-insensitively. Blank returns `[]`.
///
/// At most 50 entries are returned.
#[get("/search")]
pub async fn search_words(
    state: web::Data<AppState>,
    params: web::Query<SearchQuery>,
) -> Result<impl Responder, AppError> {
    let words = state.dictionary.search(&params.query).await?;
    Ok(HttpResponse::Ok().json(words))
}

/// Newest entries first; `limit` defaults to 10.
#[get("/recent")]
pub async fn recent_words(
    state: web::Data<AppState>,
    params: web::Query<RecentQuery>,
) -> Result<impl Responder, AppError> {
    let words = state.dictionary.recent(params.limit).await?;
    Ok(HttpResponse::Ok().json(words))
}

/// Community contribution
///
/// ## Request Body:
/// `inete`, `hiligaynon` and `english` are required; every other entry field
/// and `contributorName`/`contributorEmail` are optional.
///
/// ## Responses:
/// - `201 Created`: `{message, word}`.
/// - `400 Bad Request`: A headword is missing or the `inete` word already exists.
/// - `500 Internal Server Error`: Store failure.
#[post("/contribute")]
pub async fn contribute_word(
    state: web::Data<AppState>,
    contribution: web::Json<ContributionRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.dictionary.contribute(contribution.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Administrative insert. The body is stored as sent and echoed back.
#[post("")]
pub async fn add_word(
    state: web::Data<AppState>,
    new_entry: web::Json<NewEntry>,
) -> Result<impl Responder, AppError> {
    let entry = state.dictionary.add_word(new_entry.into_inner()).await?;
    Ok(HttpResponse::Created().json(entry))
}
