// Fixture repositories
// Each dashboard page reads its mock records through one of these

pub mod customer;
pub mod conversation;
pub mod settings;
pub mod integration;
pub mod dashboard;

pub use customer::*;
pub use conversation::*;
pub use settings::*;
pub use integration::*;
pub use dashboard::*;

use thiserror::Error;

/// A lookup against the fixtures that found nothing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Customer '{0}' not found")]
    CustomerNotFound(String),
    #[error("Conversation '{0}' not found")]
    ConversationNotFound(String),
    #[error("Unknown integration category '{0}'")]
    UnknownCategory(String),
}
