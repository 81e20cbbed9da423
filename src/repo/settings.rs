use crate::classify::ColorCategory;
use crate::models::{InterventionRule, KnowledgeSource, MetricRow};

/// AI agent settings fixtures: knowledge sources and intervention rules
pub struct SettingsRepo;

impl SettingsRepo {
    pub fn list_knowledge_sources() -> Vec<KnowledgeSource> {
        vec![
            source(1, "Product Documentation", "Documentation", "active", "2 hours ago", 156, 94),
            source(2, "FAQ Database", "FAQ", "active", "1 day ago", 89, 97),
            source(3, "Support Ticket History", "Historical Data", "syncing", "5 minutes ago", 2340, 89),
            source(4, "Policy Documents", "Policies", "needs_update", "1 week ago", 23, 91),
        ]
    }

    pub fn list_intervention_rules() -> Vec<InterventionRule> {
        vec![
            rule(
                1,
                "High-Value Customer Escalation",
                "Automatically escalate to human agent for Premium and Enterprise customers",
                r#"customer.tier IN ["Premium", "Enterprise"] AND confidence < 85%"#,
                "escalate_to_human",
                true,
                23,
            ),
            rule(
                2,
                "Payment Issue Detection",
                "Flag conversations mentioning payment, billing, or refund issues",
                r#"message.content CONTAINS ["payment", "billing", "refund", "charge"]"#,
                "flag_for_review",
                true,
                67,
            ),
            rule(
                3,
                "Low Confidence Threshold",
                "Hand off to human when AI confidence drops below 70%",
                "ai.confidence < 70%",
                "escalate_to_human",
                true,
                145,
            ),
            rule(
                4,
                "Sentiment Analysis Alert",
                "Alert supervisors when customer sentiment is very negative",
                "sentiment.score < 2.0 AND sentiment.confidence > 80%",
                "notify_supervisor",
                false,
                12,
            ),
        ]
    }

    pub fn performance_metrics() -> Vec<MetricRow> {
        vec![
            MetricRow::colored("Average Accuracy", "94%", ColorCategory::Green),
            MetricRow::colored("Resolution Rate", "87%", ColorCategory::Blue),
            MetricRow::colored("Avg Response Time", "2.3s", ColorCategory::Purple),
            MetricRow::colored("Human Handoffs Today", "145", ColorCategory::Yellow),
        ]
    }
}

fn source(id: i64, name: &str, source_type: &str, status: &str, last_updated: &str, articles: u32, accuracy: u8) -> KnowledgeSource {
    KnowledgeSource {
        id,
        name: name.to_string(),
        source_type: source_type.to_string(),
        status: status.to_string(),
        last_updated: last_updated.to_string(),
        articles,
        accuracy,
    }
}

fn rule(id: i64, name: &str, description: &str, condition: &str, action: &str, is_active: bool, triggered_count: u32) -> InterventionRule {
    InterventionRule {
        id,
        name: name.to_string(),
        description: description.to_string(),
        condition: condition.to_string(),
        action: action.to_string(),
        is_active,
        triggered_count,
    }
}
