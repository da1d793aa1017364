use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Contributor name recorded when a contribution does not carry one.
pub const ANONYMOUS_CONTRIBUTOR: &str = "Anonymous";

/// A multilingual dictionary entry.
///
/// Entries are immutable once stored. `inete` acts as the natural key: the
/// store keeps at most one entry per lower-cased `inete` headword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: Uuid,
    pub inete: String,
    pub hiligaynon: String,
    pub english: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definition_inete: String,
    pub definition_hiligaynon: String,
    pub definition_english: String,
    pub example_inete: String,
    pub example_hiligaynon: String,
    pub example_english: String,
    pub contributor_name: Option<String>,
    pub contributor_email: Option<String>,
    pub category: String,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DictionaryEntry {
    /// The lower-cased, trimmed `inete` headword used for duplicate detection.
    pub fn inete_key(&self) -> String {
        inete_key(&self.inete)
    }
}

pub fn inete_key(inete: &str) -> String {
    inete.trim().to_lowercase()
}

/// Payload of the administrative insert path.
///
/// The three headwords are required by the type; nothing else is checked and
/// values are stored exactly as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewEntry {
    pub inete: String,
    pub hiligaynon: String,
    pub english: String,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub definition_inete: Option<String>,
    pub definition_hiligaynon: Option<String>,
    pub definition_english: Option<String>,
    pub example_inete: Option<String>,
    pub example_hiligaynon: Option<String>,
    pub example_english: Option<String>,
    pub contributor_name: Option<String>,
    pub contributor_email: Option<String>,
    pub category: Option<String>,
    pub audio_url: Option<String>,
}

impl NewEntry {
    pub fn into_entry(self) -> DictionaryEntry {
        DictionaryEntry {
            id: Uuid::new_v4(),
            inete: self.inete,
            hiligaynon: self.hiligaynon,
            english: self.english,
            pronunciation: self.pronunciation.unwrap_or_default(),
            part_of_speech: self.part_of_speech.unwrap_or_default(),
            definition_inete: self.definition_inete.unwrap_or_default(),
            definition_hiligaynon: self.definition_hiligaynon.unwrap_or_default(),
            definition_english: self.definition_english.unwrap_or_default(),
            example_inete: self.example_inete.unwrap_or_default(),
            example_hiligaynon: self.example_hiligaynon.unwrap_or_default(),
            example_english: self.example_english.unwrap_or_default(),
            contributor_name: self.contributor_name,
            contributor_email: self.contributor_email,
            category: self.category.unwrap_or_default(),
            audio_url: self.audio_url,
            created_at: Utc::now(),
        }
    }
}

/// Payload of a community contribution. Every field may be absent or null;
/// presence of the headwords is checked after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ContributionRequest {
    pub inete: Option<String>,
    pub hiligaynon: Option<String>,
    pub english: Option<String>,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub definition_inete: Option<String>,
    pub definition_hiligaynon: Option<String>,
    pub definition_english: Option<String>,
    pub example_inete: Option<String>,
    pub example_hiligaynon: Option<String>,
    pub example_english: Option<String>,
    pub contributor_name: Option<String>,
    pub contributor_email: Option<String>,
    pub category: Option<String>,
    pub audio_url: Option<String>,
}

/// The trimmed headwords of a contribution.
#[derive(Debug, Validate)]
struct Headwords {
    #[validate(length(min = 1))]
    inete: String,
    #[validate(length(min = 1))]
    hiligaynon: String,
    #[validate(length(min = 1))]
    english: String,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl ContributionRequest {
    /// Trims every field, checks the headwords and fills in defaults.
    pub fn into_entry(self) -> Result<DictionaryEntry, ValidationErrors> {
        let headwords = Headwords {
            inete: trimmed(self.inete),
            hiligaynon: trimmed(self.hiligaynon),
            english: trimmed(self.english),
        };
        headwords.validate()?;

        let contributor_name = match trimmed(self.contributor_name) {
            name if name.is_empty() => ANONYMOUS_CONTRIBUTOR.to_string(),
            name => name,
        };

        Ok(DictionaryEntry {
            id: Uuid::new_v4(),
            inete: headwords.inete,
            hiligaynon: headwords.hiligaynon,
            english: headwords.english,
            pronunciation: trimmed(self.pronunciation),
            part_of_speech: trimmed(self.part_of_speech),
            definition_inete: trimmed(self.definition_inete),
            definition_hiligaynon: trimmed(self.definition_hiligaynon),
            definition_english: trimmed(self.definition_english),
            example_inete: trimmed(self.example_inete),
            example_hiligaynon: trimmed(self.example_hiligaynon),
            example_english: trimmed(self.example_english),
            contributor_name: Some(contributor_name),
            contributor_email: Some(trimmed(self.contributor_email)),
            category: trimmed(self.category),
            audio_url: Some(trimmed(self.audio_url)),
            created_at: Utc::now(),
        })
    }
}
