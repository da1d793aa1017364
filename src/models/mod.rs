pub mod entry;
pub mod user;

pub use entry::{ContributionRequest, DictionaryEntry, NewEntry};
pub use user::User;
