use crate::classify::{classify, DomainTag, PresentationToken};
use serde::Serialize;

/// A third-party tool, connected or available to connect
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Connection status; None for integrations not yet connected
    pub status: Option<String>,
    pub last_sync: Option<String>,
    pub popular: bool,
}

impl Integration {
    pub fn is_connected(&self) -> bool {
        self.status.is_some()
    }

    pub fn status_token(&self) -> Option<PresentationToken> {
        self.status.as_deref().map(|s| classify(DomainTag::Integration, s))
    }
}
