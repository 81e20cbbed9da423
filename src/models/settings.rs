use crate::classify::{classify, humanize_label, DomainTag, PresentationToken};
use serde::Serialize;

/// A knowledge base feeding the AI agent
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeSource {
    pub id: i64,
    pub name: String,
    pub source_type: String,
    pub status: String,
    pub last_updated: String,
    pub articles: u32,
    /// Answer accuracy percentage
    pub accuracy: u8,
}

impl KnowledgeSource {
    pub fn status_token(&self) -> PresentationToken {
        classify(DomainTag::KnowledgeSource, &self.status)
    }
}

/// Rule deciding when the AI hands a conversation to a human
#[derive(Debug, Clone, Serialize)]
pub struct InterventionRule {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub condition: String,
    pub action: String,
    pub is_active: bool,
    pub triggered_count: u32,
}

impl InterventionRule {
    pub fn action_label(&self) -> String {
        humanize_label(&self.action)
    }
}
