use crate::classify::{classify, classify_confidence, DomainTag, PresentationToken};
use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Conversation as listed on the conversations page
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummary {
    pub id: String,
    pub customer: String,
    pub subject: String,
    pub last_message: String,
    pub timestamp: String,
    pub priority: Option<String>,
    pub status: String,
    pub agent_assigned: Option<String>,
    /// AI confidence percentage, set for AI-handled conversations
    pub confidence: Option<u8>,
    pub message_count: u32,
}

impl ConversationSummary {
    pub fn status_token(&self) -> PresentationToken {
        classify(DomainTag::Conversation, &self.status)
    }

    pub fn priority_token(&self) -> Option<PresentationToken> {
        self.priority.as_deref().map(|p| classify(DomainTag::Priority, p))
    }

    pub fn confidence_token(&self) -> Option<PresentationToken> {
        self.confidence.map(|c| classify_confidence(f64::from(c)))
    }

    pub fn is_ai_handled(&self) -> bool {
        self.confidence.is_some()
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Ai,
    Agent,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Customer => "customer",
            Sender::Ai => "ai",
            Sender::Agent => "agent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    /// Handoff to a human agent
    Escalation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: NaiveTime,
    pub kind: MessageKind,
    pub confidence: Option<u8>,
}

/// One step of the AI's reasoning alongside the transcript
#[derive(Debug, Clone, Serialize)]
pub struct ThoughtStep {
    pub timestamp: NaiveTime,
    pub thought: String,
    pub action: String,
    pub confidence: String,
}

impl ThoughtStep {
    pub fn confidence_token(&self) -> PresentationToken {
        classify(DomainTag::ThoughtConfidence, &self.confidence)
    }
}

/// Customer details shown beside a conversation
#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub name: String,
    pub email: String,
    pub company: String,
    pub tier: String,
    pub status: String,
}

/// Full conversation with transcript and AI reasoning
#[derive(Debug, Clone, Serialize)]
pub struct ConversationThread {
    pub summary: ConversationSummary,
    pub contact: ContactCard,
    pub created_at: NaiveDateTime,
    pub messages: Vec<Message>,
    pub thoughts: Vec<ThoughtStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ColorCategory;

    fn summary(status: &str, priority: Option<&str>, confidence: Option<u8>) -> ConversationSummary {
        ConversationSummary {
            id: "conv900".to_string(),
            customer: "Test".to_string(),
            subject: "Subject".to_string(),
            last_message: "...".to_string(),
            timestamp: "now".to_string(),
            priority: priority.map(str::to_string),
            status: status.to_string(),
            agent_assigned: None,
            confidence,
            message_count: 1,
        }
    }

    #[test]
    fn test_summary_tokens() {
        let conv = summary("pending_agent", Some("high"), None);
        assert_eq!(conv.status_token().color, ColorCategory::Yellow);
        assert_eq!(conv.status_token().text.as_deref(), Some("pending agent"));
        assert_eq!(conv.priority_token().map(|t| t.color), Some(ColorCategory::Orange));
        assert!(conv.confidence_token().is_none());
        assert!(!conv.is_ai_handled());

        let conv = summary("monitoring", None, Some(76));
        assert_eq!(conv.confidence_token().map(|t| t.color), Some(ColorCategory::Yellow));
        assert!(conv.priority_token().is_none());
        assert!(conv.is_ai_handled());
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_value(Sender::Ai).unwrap(), "ai");
        assert_eq!(Sender::Customer.as_str(), "customer");
        assert_eq!(serde_json::to_value(MessageKind::Escalation).unwrap(), "escalation");
    }
}
