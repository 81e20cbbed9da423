use crate::classify::{classify, ColorCategory, DomainTag};
use crate::models::{Callout, MetricCard, MetricRow, NavItem};

/// Home page and navigation shell fixtures
pub struct DashboardRepo;

impl DashboardRepo {
    pub fn command_placeholder() -> &'static str {
        "Ask about customers, issues, conversations..."
    }

    pub fn command_suggestions() -> Vec<&'static str> {
        vec![
            "Show me high-risk customers",
            "What issues need attention?",
            "Customer satisfaction trends",
        ]
    }

    /// Metric cards of the AI performance dashboard
    pub fn metric_cards() -> Vec<MetricCard> {
        let sentiment = |label: &str, value: &str, bucket: &str| {
            MetricRow::colored(label, value, classify(DomainTag::Sentiment, bucket).color)
        };
        vec![
            MetricCard {
                title: "AI Performance".to_string(),
                accent: ColorCategory::Blue,
                rows: vec![
                    MetricRow::new("Resolution Rate", "87%"),
                    MetricRow::new("Avg Response Time", "2.3s"),
                    MetricRow::new("Accuracy Score", "94%"),
                ],
            },
            MetricCard {
                title: "AI Automations".to_string(),
                accent: ColorCategory::Purple,
                rows: vec![
                    MetricRow::new("Auto-Responses", "156 today"),
                    MetricRow::new("Escalations Prevented", "23"),
                    MetricRow::new("Tickets Resolved", "89"),
                ],
            },
            MetricCard {
                title: "Customer Sentiment".to_string(),
                accent: ColorCategory::Red,
                rows: vec![
                    sentiment("Positive", "68%", "positive"),
                    sentiment("Neutral", "24%", "neutral"),
                    sentiment("Negative", "8%", "negative"),
                ],
            },
        ]
    }

    /// Callouts of the "AI Insights & Recommendations" card
    pub fn insights() -> Vec<Callout> {
        vec![
            callout("3 customers show churn risk", ColorCategory::Yellow),
            callout("Peak hours: 2-4 PM daily", ColorCategory::Blue),
            callout("FAQ accuracy improved 15%", ColorCategory::Green),
        ]
    }

    /// Sidebar entries, each naming the subcommand that renders the page
    pub fn nav_items() -> Vec<NavItem> {
        vec![
            nav("home", "Home"),
            nav("customers", "Customers"),
            nav("conversations", "Conversations"),
            nav("ai-settings", "AI Agent Settings"),
            nav("integrations", "Integrations"),
        ]
    }

    pub fn current_user() -> &'static str {
        "Admin User"
    }
}

fn callout(text: &str, color: ColorCategory) -> Callout {
    Callout { text: text.to_string(), color }
}

fn nav(command: &str, label: &str) -> NavItem {
    NavItem { command: command.to_string(), label: label.to_string() }
}
