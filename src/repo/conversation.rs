use crate::classify::ColorCategory;
use crate::models::{
    ContactCard, ConversationSummary, ConversationThread, Message, MessageKind, MetricRow, Sender,
    ThoughtStep,
};
use crate::repo::LookupError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Conversation fixtures
///
/// Conversations fall in two groups: those waiting on a human agent and
/// those the AI handled on its own (the ones carrying a confidence score).
pub struct ConversationRepo;

impl ConversationRepo {
    /// Conversations needing agent attention
    pub fn list_needing_attention() -> Vec<ConversationSummary> {
        vec![
            ConversationSummary {
                id: "conv001".to_string(),
                customer: "Sarah Johnson".to_string(),
                subject: "Payment method expired - urgent assistance needed".to_string(),
                last_message: "I need help updating my payment method immediately...".to_string(),
                timestamp: "5 minutes ago".to_string(),
                priority: Some("urgent".to_string()),
                status: "escalated".to_string(),
                agent_assigned: None,
                confidence: None,
                message_count: 8,
            },
            ConversationSummary {
                id: "conv002".to_string(),
                customer: "Michael Chen".to_string(),
                subject: "API integration not working properly".to_string(),
                last_message: "The webhook endpoints are returning 404 errors...".to_string(),
                timestamp: "15 minutes ago".to_string(),
                priority: Some("high".to_string()),
                status: "pending_agent".to_string(),
                agent_assigned: None,
                confidence: None,
                message_count: 12,
            },
            ConversationSummary {
                id: "conv003".to_string(),
                customer: "Emily Rodriguez".to_string(),
                subject: "Account access issues after password reset".to_string(),
                last_message: "I reset my password but still cannot log in...".to_string(),
                timestamp: "32 minutes ago".to_string(),
                priority: Some("medium".to_string()),
                status: "in_progress".to_string(),
                agent_assigned: Some("Alex Turner".to_string()),
                confidence: None,
                message_count: 6,
            },
        ]
    }

    /// Conversations the AI handled without an agent
    pub fn list_ai_handled() -> Vec<ConversationSummary> {
        vec![
            ai_handled("conv004", "David Thompson", "How to reset password",
                "AI: I've sent password reset instructions to your email.", "1 hour ago", "resolved", 95, 3),
            ai_handled("conv005", "Lisa Wang", "Billing cycle questions",
                "AI: Your next billing date is March 15th, 2024.", "2 hours ago", "resolved", 92, 5),
            ai_handled("conv006", "Robert Kim", "Feature documentation request",
                "AI: Here are the documentation links you requested.", "3 hours ago", "resolved", 88, 4),
            ai_handled("conv007", "Anna Schmidt", "Account upgrade process",
                "AI: I've provided the upgrade steps and pricing information.", "4 hours ago", "monitoring", 76, 7),
        ]
    }

    pub fn list_all() -> Vec<ConversationSummary> {
        let mut all = Self::list_needing_attention();
        all.extend(Self::list_ai_handled());
        all
    }

    pub fn ids() -> Vec<String> {
        Self::list_all().into_iter().map(|c| c.id).collect()
    }

    pub fn get_summary(id: &str) -> Option<ConversationSummary> {
        log::debug!("conversation lookup: {}", id);
        Self::list_all().into_iter().find(|c| c.id == id)
    }

    pub fn require_summary(id: &str) -> Result<ConversationSummary, LookupError> {
        Self::get_summary(id).ok_or_else(|| LookupError::ConversationNotFound(id.to_string()))
    }

    /// Full transcript, for conversations that have one recorded
    pub fn get_thread(id: &str) -> Option<ConversationThread> {
        match id {
            "conv001" => Self::get_summary(id).map(payment_thread),
            _ => None,
        }
    }

    /// Totals shown above the conversation lists
    pub fn summary_stats() -> Vec<MetricRow> {
        let attention = Self::list_needing_attention().len();
        let ai_handled = Self::list_ai_handled().len();
        vec![
            MetricRow::colored("Need Attention", &attention.to_string(), ColorCategory::Red),
            MetricRow::colored("AI Handled", &ai_handled.to_string(), ColorCategory::Green),
            MetricRow::colored("Resolved Today", "156", ColorCategory::Blue),
            MetricRow::colored("Avg Response", "2.3m", ColorCategory::Purple),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn ai_handled(
    id: &str,
    customer: &str,
    subject: &str,
    last_message: &str,
    timestamp: &str,
    status: &str,
    confidence: u8,
    message_count: u32,
) -> ConversationSummary {
    ConversationSummary {
        id: id.to_string(),
        customer: customer.to_string(),
        subject: subject.to_string(),
        last_message: last_message.to_string(),
        timestamp: timestamp.to_string(),
        priority: None,
        status: status.to_string(),
        agent_assigned: None,
        confidence: Some(confidence),
        message_count,
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn message(id: i64, sender: Sender, content: &str, time: NaiveTime, kind: MessageKind, confidence: Option<u8>) -> Message {
    Message {
        id,
        sender,
        content: content.to_string(),
        timestamp: time,
        kind,
        confidence,
    }
}

fn thought(time: NaiveTime, text: &str, action: &str, confidence: &str) -> ThoughtStep {
    ThoughtStep {
        timestamp: time,
        thought: text.to_string(),
        action: action.to_string(),
        confidence: confidence.to_string(),
    }
}

fn payment_thread(summary: ConversationSummary) -> ConversationThread {
    let created_at: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap_or_default();

    ConversationThread {
        summary,
        contact: ContactCard {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@techcorp.com".to_string(),
            company: "TechCorp Inc.".to_string(),
            tier: "Premium".to_string(),
            status: "Active".to_string(),
        },
        created_at,
        messages: vec![
            message(1, Sender::Customer,
                "Hi, I'm having trouble with my payment method. It says it's expired but I just updated it yesterday.",
                at(9, 30), MessageKind::Text, None),
            message(2, Sender::Ai,
                "I understand your concern about the payment method issue. Let me check your account details to help resolve this quickly.",
                at(9, 31), MessageKind::Text, Some(92)),
            message(3, Sender::Customer,
                "Thank you. I need this resolved ASAP as my team can't access the service right now.",
                at(9, 32), MessageKind::Text, None),
            message(4, Sender::Ai,
                "I can see that your payment method was updated yesterday, but there might be a verification delay. I've escalated this to our payment processing team for immediate review.",
                at(9, 33), MessageKind::Text, Some(85)),
            message(5, Sender::Customer,
                "How long will this take? This is really urgent for our business operations.",
                at(9, 35), MessageKind::Text, None),
            message(6, Sender::Ai,
                "I understand the urgency. Based on the complexity of this payment verification issue, I'm connecting you with a human agent who can expedite this process. They should be with you shortly.",
                at(9, 36), MessageKind::Escalation, Some(78)),
        ],
        thoughts: vec![
            thought(at(9, 31), "Customer reporting payment method issue. Checking account status...",
                "Account lookup", "High"),
            thought(at(9, 32), "Detected urgency in customer tone. Payment method updated yesterday but showing as expired.",
                "Sentiment analysis", "High"),
            thought(at(9, 33), "Payment verification delay identified. Customer is Premium tier - requires priority handling.",
                "Escalation trigger", "Medium"),
            thought(at(9, 36), "Multiple urgency indicators detected. Confidence dropping below threshold for automated resolution.",
                "Human handoff", "Low"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_disjoint_and_ordered() {
        let attention = ConversationRepo::list_needing_attention();
        let ai = ConversationRepo::list_ai_handled();
        assert!(attention.iter().all(|c| !c.is_ai_handled()));
        assert!(ai.iter().all(|c| c.is_ai_handled()));
        assert_eq!(ConversationRepo::ids().len(), attention.len() + ai.len());
        assert_eq!(ConversationRepo::ids()[0], "conv001");
    }

    #[test]
    fn test_thread_lookup() {
        let thread = ConversationRepo::get_thread("conv001").unwrap();
        assert_eq!(thread.messages.len(), 6);
        assert_eq!(thread.thoughts.len(), 4);
        assert_eq!(thread.created_at.format("%Y-%m-%d %I:%M %p").to_string(), "2024-01-15 09:30 AM");
        assert_eq!(thread.messages.last().map(|m| m.kind), Some(MessageKind::Escalation));

        assert!(ConversationRepo::get_summary("conv004").is_some());
        assert!(ConversationRepo::get_thread("conv004").is_none());
        assert!(ConversationRepo::get_thread("conv999").is_none());
    }

    #[test]
    fn test_require_summary() {
        assert_eq!(
            ConversationRepo::require_summary("nope").unwrap_err(),
            LookupError::ConversationNotFound("nope".to_string())
        );
        assert_eq!(ConversationRepo::require_summary("conv007").unwrap().status, "monitoring");
    }

    #[test]
    fn test_summary_stats_follow_fixtures() {
        let stats = ConversationRepo::summary_stats();
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[1].value, "4");
    }
}
