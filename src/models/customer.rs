use crate::classify::{classify, ColorCategory, DomainTag, PresentationToken, ScoreMeter};
use serde::Serialize;

/// A customer on the proactive outreach list
#[derive(Debug, Clone, Serialize)]
pub struct OutreachCustomer {
    pub id: String,
    pub name: String,
    pub company: String,
    pub risk_level: String,
    pub last_contact: String,
    pub issue: String,
    pub priority: String,
}

impl OutreachCustomer {
    pub fn risk_token(&self) -> PresentationToken {
        classify(DomainTag::Risk, &self.risk_level)
    }

    pub fn priority_token(&self) -> PresentationToken {
        classify(DomainTag::Priority, &self.priority)
    }
}

/// Full customer record shown on the detail page
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub account_value: String,
    pub join_date: String,
    pub status: String,
    pub tier: String,
    pub location: String,
    pub activities: Vec<Activity>,
    pub insights: Vec<Insight>,
    pub actions: Vec<RecommendedAction>,
}

impl CustomerProfile {
    pub fn status_token(&self) -> PresentationToken {
        classify(DomainTag::AccountStatus, &self.status)
    }

    pub fn tier_token(&self) -> PresentationToken {
        classify(DomainTag::Tier, &self.tier)
    }

    /// Initials for the avatar ("Sarah Johnson" -> "SJ")
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of each word, uppercased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Recent account activity
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: i64,
    pub kind: String,
    pub title: String,
    pub timestamp: String,
    pub status: String,
    pub severity: String,
}

impl Activity {
    pub fn status_token(&self) -> PresentationToken {
        classify(DomainTag::Activity, &self.status)
    }

    pub fn kind_token(&self) -> PresentationToken {
        classify(DomainTag::ActivityKind, &self.kind)
    }
}

/// AI insight card with a score meter
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub title: String,
    pub summary: String,
    pub meter_label: String,
    pub meter: ScoreMeter,
}

/// AI-recommended next step for a customer
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedAction {
    pub title: String,
    pub detail: String,
    pub button: String,
    pub color: ColorCategory,
}

/// Customer card carrying an AI signal badge
#[derive(Debug, Clone, Serialize)]
pub struct SignalCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub signal_text: String,
    pub signal: String,
    pub action_text: String,
}

impl SignalCustomer {
    pub fn signal_token(&self) -> PresentationToken {
        classify(DomainTag::Signal, &self.signal)
    }
}
