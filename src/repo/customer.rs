use crate::classify::{ColorCategory, ScoreMeter};
use crate::models::{
    Activity, CustomerProfile, Insight, MetricRow, OutreachCustomer, RecommendedAction,
    SignalCustomer,
};
use crate::repo::LookupError;

/// Customer fixtures
///
/// Backs the customers page (outreach list, quick stats, AI signal cards)
/// and the customer detail page.
///
/// # Example
///
/// ```
/// use service_studio::repo::CustomerRepo;
///
/// let outreach = CustomerRepo::list_outreach();
/// assert_eq!(outreach.len(), 4);
/// let profile = CustomerRepo::get_by_id("c001").unwrap();
/// assert_eq!(profile.name, "Sarah Johnson");
/// ```
pub struct CustomerRepo;

impl CustomerRepo {
    /// Customers needing proactive outreach, most at risk first
    pub fn list_outreach() -> Vec<OutreachCustomer> {
        vec![
            outreach("c001", "Sarah Johnson", "TechCorp Inc.", "high", "3 days ago", "Payment method expired", "urgent"),
            outreach("c002", "Michael Chen", "DataFlow Solutions", "medium", "1 week ago", "Feature request pending", "medium"),
            outreach("c003", "Emily Rodriguez", "Global Logistics Ltd.", "high", "5 days ago", "Multiple failed integrations", "urgent"),
            outreach("c004", "David Thompson", "StartupXYZ", "low", "2 weeks ago", "Onboarding incomplete", "low"),
        ]
    }

    /// All known customer ids
    pub fn ids() -> Vec<String> {
        Self::list_outreach().into_iter().map(|c| c.id).collect()
    }

    /// Full profile for a customer id
    pub fn get_by_id(id: &str) -> Option<CustomerProfile> {
        log::debug!("customer lookup: {}", id);
        match id {
            "c001" => Some(sarah_johnson()),
            "c002" => Some(michael_chen()),
            "c003" => Some(emily_rodriguez()),
            "c004" => Some(david_thompson()),
            _ => None,
        }
    }

    pub fn require(id: &str) -> Result<CustomerProfile, LookupError> {
        Self::get_by_id(id).ok_or_else(|| LookupError::CustomerNotFound(id.to_string()))
    }

    /// Customer base totals shown under the outreach list
    pub fn quick_stats() -> Vec<MetricRow> {
        vec![
            MetricRow::new("Total Customers", "247"),
            MetricRow::colored("High Risk", "12", ColorCategory::Red),
            MetricRow::colored("Medium Risk", "28", ColorCategory::Yellow),
            MetricRow::colored("Healthy", "207", ColorCategory::Green),
        ]
    }

    /// Customers with an AI signal and a suggested action
    pub fn list_signals() -> Vec<SignalCustomer> {
        vec![
            signal("1", "Alex Johnson", "a.johnson@web.com", "High Upsell Potential", "green", "View Upsell"),
            signal("2", "Maria Garcia", "m.garcia@email.net", "Low Sentiment", "yellow", "Improve Sentiment"),
            signal("3", "David Kim", "dkim@mail.org", "At-Risk for Churn", "red", "View Details"),
            signal("4", "Emily White", "e.white@company.com", "Good for Promo", "blue", "Send Promo"),
        ]
    }

    /// Placeholder text of the (unwired) lookup box
    pub fn lookup_placeholder() -> &'static str {
        "Search by name, email, company, or customer ID..."
    }

    pub fn lookup_suggestions() -> Vec<&'static str> {
        vec!["Recent searches", "High-value customers", "At-risk customers"]
    }
}

fn outreach(id: &str, name: &str, company: &str, risk: &str, last_contact: &str, issue: &str, priority: &str) -> OutreachCustomer {
    OutreachCustomer {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        risk_level: risk.to_string(),
        last_contact: last_contact.to_string(),
        issue: issue.to_string(),
        priority: priority.to_string(),
    }
}

fn signal(id: &str, name: &str, email: &str, text: &str, kind: &str, action: &str) -> SignalCustomer {
    SignalCustomer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        signal_text: text.to_string(),
        signal: kind.to_string(),
        action_text: action.to_string(),
    }
}

fn activity(id: i64, kind: &str, title: &str, timestamp: &str, status: &str, severity: &str) -> Activity {
    Activity {
        id,
        kind: kind.to_string(),
        title: title.to_string(),
        timestamp: timestamp.to_string(),
        status: status.to_string(),
        severity: severity.to_string(),
    }
}

fn insight(title: &str, summary: &str, meter_label: &str, meter: ScoreMeter) -> Insight {
    Insight {
        title: title.to_string(),
        summary: summary.to_string(),
        meter_label: meter_label.to_string(),
        meter,
    }
}

fn action(title: &str, detail: &str, button: &str, color: ColorCategory) -> RecommendedAction {
    RecommendedAction {
        title: title.to_string(),
        detail: detail.to_string(),
        button: button.to_string(),
        color,
    }
}

struct Contact<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    account_value: &'a str,
    join_date: &'a str,
    tier: &'a str,
    location: &'a str,
}

fn profile(
    contact: Contact<'_>,
    activities: Vec<Activity>,
    insights: Vec<Insight>,
    actions: Vec<RecommendedAction>,
) -> CustomerProfile {
    CustomerProfile {
        id: contact.id.to_string(),
        name: contact.name.to_string(),
        email: contact.email.to_string(),
        phone: contact.phone.to_string(),
        company: contact.company.to_string(),
        account_value: contact.account_value.to_string(),
        join_date: contact.join_date.to_string(),
        status: "Active".to_string(),
        tier: contact.tier.to_string(),
        location: contact.location.to_string(),
        activities,
        insights,
        actions,
    }
}

fn sarah_johnson() -> CustomerProfile {
    profile(
        Contact {
            id: "c001",
            name: "Sarah Johnson",
            email: "sarah.johnson@techcorp.com",
            phone: "+1 (555) 123-4567",
            company: "TechCorp Inc.",
            account_value: "$24,500",
            join_date: "March 2023",
            tier: "Premium",
            location: "San Francisco, CA",
        },
        vec![
            activity(1, "support_ticket", "Payment method expired - needs update", "2 hours ago", "open", "high"),
            activity(2, "login", "Logged into dashboard", "1 day ago", "completed", "low"),
            activity(3, "feature_request", "Requested API rate limit increase", "3 days ago", "in_progress", "medium"),
            activity(4, "payment", "Monthly subscription payment failed", "3 days ago", "failed", "high"),
        ],
        vec![
            insight(
                "Customer Sentiment",
                "Negative - Recent payment issues causing frustration",
                "Sentiment Score",
                ScoreMeter::new(2.1, 5.0, ColorCategory::Red),
            ),
            insight(
                "Churn Risk",
                "High risk due to payment failures and support tickets",
                "Risk Level",
                ScoreMeter::percent(78.0, ColorCategory::Yellow),
            ),
            insight(
                "Engagement Score",
                "Below average engagement in past 30 days",
                "Engagement",
                ScoreMeter::new(6.2, 10.0, ColorCategory::Blue),
            ),
        ],
        vec![
            action(
                "Priority: Resolve Payment Issue",
                "Send payment update reminder with assistance offer",
                "Execute",
                ColorCategory::Purple,
            ),
            action(
                "Schedule Check-in Call",
                "Proactive outreach to address concerns and gather feedback",
                "Schedule",
                ColorCategory::Blue,
            ),
            action(
                "Offer Premium Support",
                "Upgrade to dedicated support to prevent churn",
                "Offer",
                ColorCategory::Green,
            ),
        ],
    )
}

fn michael_chen() -> CustomerProfile {
    profile(
        Contact {
            id: "c002",
            name: "Michael Chen",
            email: "michael.chen@dataflow.io",
            phone: "+1 (555) 234-5678",
            company: "DataFlow Solutions",
            account_value: "$12,800",
            join_date: "July 2023",
            tier: "Standard",
            location: "Seattle, WA",
        },
        vec![
            activity(1, "feature_request", "Requested bulk export for webhook logs", "1 week ago", "in_progress", "medium"),
            activity(2, "support_ticket", "Webhook endpoints returning 404 errors", "2 weeks ago", "open", "high"),
            activity(3, "login", "Logged into dashboard", "2 weeks ago", "completed", "low"),
        ],
        vec![
            insight(
                "Customer Sentiment",
                "Neutral - Waiting on a pending feature request",
                "Sentiment Score",
                ScoreMeter::new(3.4, 5.0, ColorCategory::Yellow),
            ),
            insight(
                "Churn Risk",
                "Moderate risk while the integration issue stays open",
                "Risk Level",
                ScoreMeter::percent(41.0, ColorCategory::Yellow),
            ),
            insight(
                "Engagement Score",
                "Steady API usage over the past 30 days",
                "Engagement",
                ScoreMeter::new(7.4, 10.0, ColorCategory::Blue),
            ),
        ],
        vec![action(
            "Share Feature Roadmap",
            "Send an update on the bulk export request with a target date",
            "Send",
            ColorCategory::Blue,
        )],
    )
}

fn emily_rodriguez() -> CustomerProfile {
    profile(
        Contact {
            id: "c003",
            name: "Emily Rodriguez",
            email: "emily.rodriguez@globallogistics.com",
            phone: "+1 (555) 345-6789",
            company: "Global Logistics Ltd.",
            account_value: "$38,200",
            join_date: "January 2022",
            tier: "Enterprise",
            location: "Chicago, IL",
        },
        vec![
            activity(1, "support_ticket", "Salesforce sync failing after token refresh", "5 days ago", "open", "high"),
            activity(2, "support_ticket", "Zendesk import stopped mid-run", "6 days ago", "failed", "high"),
            activity(3, "payment", "Annual invoice paid", "1 month ago", "completed", "low"),
        ],
        vec![
            insight(
                "Customer Sentiment",
                "Negative - Repeated integration failures",
                "Sentiment Score",
                ScoreMeter::new(2.4, 5.0, ColorCategory::Red),
            ),
            insight(
                "Churn Risk",
                "High risk: two failed integrations in one week",
                "Risk Level",
                ScoreMeter::percent(71.0, ColorCategory::Yellow),
            ),
            insight(
                "Engagement Score",
                "Usage dropped after the sync failures",
                "Engagement",
                ScoreMeter::new(5.1, 10.0, ColorCategory::Blue),
            ),
        ],
        vec![
            action(
                "Priority: Fix Integrations",
                "Assign an integration engineer to both failing connectors",
                "Execute",
                ColorCategory::Purple,
            ),
            action(
                "Schedule Check-in Call",
                "Walk through the fix plan with the account owner",
                "Schedule",
                ColorCategory::Blue,
            ),
        ],
    )
}

fn david_thompson() -> CustomerProfile {
    profile(
        Contact {
            id: "c004",
            name: "David Thompson",
            email: "david@startupxyz.com",
            phone: "+1 (555) 456-7890",
            company: "StartupXYZ",
            account_value: "$3,600",
            join_date: "November 2023",
            tier: "Standard",
            location: "Austin, TX",
        },
        vec![activity(1, "login", "Logged into dashboard", "2 weeks ago", "completed", "low")],
        vec![
            insight(
                "Customer Sentiment",
                "Positive - No open issues",
                "Sentiment Score",
                ScoreMeter::new(4.2, 5.0, ColorCategory::Green),
            ),
            insight(
                "Churn Risk",
                "Low risk, but onboarding is incomplete",
                "Risk Level",
                ScoreMeter::percent(18.0, ColorCategory::Yellow),
            ),
            insight(
                "Engagement Score",
                "Few logins since signup",
                "Engagement",
                ScoreMeter::new(3.0, 10.0, ColorCategory::Blue),
            ),
        ],
        vec![action(
            "Resume Onboarding",
            "Send the onboarding checklist with a setup call offer",
            "Send",
            ColorCategory::Green,
        )],
    )
}
