//! Presentation classification for dashboard labels
//!
//! Every badge, icon and colored figure on the dashboard comes from here. A
//! caller names the domain a label belongs to (knowledge source status,
//! conversation status, priority, ...) and gets back a [`PresentationToken`].
//!
//! Each domain owns a closed label set. Labels are matched exactly, so
//! `in_progress` means different things for a conversation (blue) and for a
//! customer activity (yellow). Anything outside a domain's set classifies as
//! the neutral gray token; classification never fails.
//!
//! # Example
//!
//! ```
//! use service_studio::classify::{classify, ColorCategory, DomainTag};
//!
//! let token = classify(DomainTag::KnowledgeSource, "needs_update");
//! assert_eq!(token.color, ColorCategory::Yellow);
//! assert_eq!(token.text.as_deref(), Some("needs update"));
//! ```

mod label;
mod threshold;

pub use label::{humanize_label, LABEL_SEPARATOR};
pub use threshold::{
    classify_by_threshold, classify_confidence, Band, ScoreMeter, CONFIDENCE_BANDS,
    CONFIDENCE_HIGH, CONFIDENCE_MEDIUM,
};

use serde::Serialize;

/// Semantic color of a presentation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Green,
    Yellow,
    Red,
    Blue,
    Purple,
    Orange,
    Gray,
}

impl ColorCategory {
    pub const ALL: &'static [ColorCategory] = &[
        ColorCategory::Green,
        ColorCategory::Yellow,
        ColorCategory::Red,
        ColorCategory::Blue,
        ColorCategory::Purple,
        ColorCategory::Orange,
        ColorCategory::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Green => "green",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Red => "red",
            ColorCategory::Blue => "blue",
            ColorCategory::Purple => "purple",
            ColorCategory::Orange => "orange",
            ColorCategory::Gray => "gray",
        }
    }
}

/// Symbolic icon selector. Renderers decide what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Check,
    Alert,
    Warning,
    Clock,
    Sync,
    Calendar,
    TrendingDown,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Check => "check",
            Icon::Alert => "alert",
            Icon::Warning => "warning",
            Icon::Clock => "clock",
            Icon::Sync => "sync",
            Icon::Calendar => "calendar",
            Icon::TrendingDown => "trending-down",
        }
    }
}

/// Result of classifying a label or score for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationToken {
    pub color: ColorCategory,
    pub icon: Option<Icon>,
    /// Display text, present only when the raw label needed transforming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PresentationToken {
    pub const fn new(color: ColorCategory) -> Self {
        Self { color, icon: None, text: None }
    }

    pub const fn with_icon(color: ColorCategory, icon: Icon) -> Self {
        Self { color, icon: Some(icon), text: None }
    }

    /// The gray, icon-less token used for anything unrecognized
    pub const fn neutral() -> Self {
        Self::new(ColorCategory::Gray)
    }

    pub fn is_neutral(&self) -> bool {
        self.color == ColorCategory::Gray && self.icon.is_none()
    }

    /// Text to show for `raw`: the transformed text if there is one, else `raw`
    pub fn display<'a>(&'a self, raw: &'a str) -> &'a str {
        self.text.as_deref().unwrap_or(raw)
    }
}

/// Identifies which closed label set a [`classify`] call operates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainTag {
    /// AI knowledge-base source status
    KnowledgeSource,
    /// Conversation handling status
    Conversation,
    /// Customer activity status
    Activity,
    /// Integration connection status
    Integration,
    Priority,
    Risk,
    /// Confidence level attached to an AI thought step
    ThoughtConfidence,
    /// Customer signal badge color
    Signal,
    /// Customer activity type, used for its icon
    ActivityKind,
    Sentiment,
    AccountStatus,
    Tier,
}

type Entry = (&'static str, ColorCategory, Option<Icon>);

use ColorCategory::{Blue, Gray, Green, Orange, Purple, Red, Yellow};

const KNOWLEDGE_SOURCE: &[Entry] = &[
    ("active", Green, Some(Icon::Check)),
    ("syncing", Blue, Some(Icon::Sync)),
    ("needs_update", Yellow, Some(Icon::Warning)),
    ("error", Red, Some(Icon::Warning)),
];

const CONVERSATION: &[Entry] = &[
    ("escalated", Red, None),
    ("pending_agent", Yellow, None),
    ("in_progress", Blue, None),
    ("resolved", Green, None),
    ("monitoring", Purple, None),
];

const ACTIVITY: &[Entry] = &[
    ("open", Red, None),
    ("completed", Green, None),
    ("in_progress", Yellow, None),
    ("failed", Red, None),
];

const INTEGRATION: &[Entry] = &[
    ("connected", Green, Some(Icon::Check)),
    ("error", Red, Some(Icon::Alert)),
    ("pending", Yellow, Some(Icon::Clock)),
];

const PRIORITY: &[Entry] = &[
    ("urgent", Red, Some(Icon::Warning)),
    ("high", Orange, Some(Icon::Calendar)),
    ("medium", Yellow, Some(Icon::Calendar)),
    ("low", Gray, Some(Icon::Calendar)),
];

const RISK: &[Entry] = &[
    ("high", Red, None),
    ("medium", Yellow, None),
    ("low", Green, None),
];

const THOUGHT_CONFIDENCE: &[Entry] = &[
    ("High", Green, None),
    ("Medium", Yellow, None),
    ("Low", Red, None),
];

const SIGNAL: &[Entry] = &[
    ("green", Green, None),
    ("yellow", Yellow, None),
    ("red", Red, None),
    ("blue", Blue, None),
];

const ACTIVITY_KIND: &[Entry] = &[
    ("support_ticket", Gray, Some(Icon::Alert)),
    ("login", Gray, Some(Icon::Check)),
    ("feature_request", Gray, Some(Icon::Clock)),
    ("payment", Gray, Some(Icon::TrendingDown)),
];

const SENTIMENT: &[Entry] = &[
    ("positive", Green, None),
    ("neutral", Gray, None),
    ("negative", Red, None),
];

const ACCOUNT_STATUS: &[Entry] = &[("Active", Green, None)];

const TIER: &[Entry] = &[
    ("Premium", Purple, None),
    ("Enterprise", Purple, None),
    ("Standard", Blue, None),
];

impl DomainTag {
    pub const ALL: &'static [DomainTag] = &[
        DomainTag::KnowledgeSource,
        DomainTag::Conversation,
        DomainTag::Activity,
        DomainTag::Integration,
        DomainTag::Priority,
        DomainTag::Risk,
        DomainTag::ThoughtConfidence,
        DomainTag::Signal,
        DomainTag::ActivityKind,
        DomainTag::Sentiment,
        DomainTag::AccountStatus,
        DomainTag::Tier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainTag::KnowledgeSource => "knowledge-source",
            DomainTag::Conversation => "conversation",
            DomainTag::Activity => "activity",
            DomainTag::Integration => "integration",
            DomainTag::Priority => "priority",
            DomainTag::Risk => "risk",
            DomainTag::ThoughtConfidence => "thought-confidence",
            DomainTag::Signal => "signal",
            DomainTag::ActivityKind => "activity-kind",
            DomainTag::Sentiment => "sentiment",
            DomainTag::AccountStatus => "account-status",
            DomainTag::Tier => "tier",
        }
    }

    /// Parse a domain name. Case-insensitive; `_` is accepted for `-`.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.iter().copied().find(|d| d.as_str() == normalized)
    }

    /// The closed label set of this domain, in display order
    pub fn labels(&self) -> Vec<&'static str> {
        self.table().iter().map(|(label, _, _)| *label).collect()
    }

    fn table(&self) -> &'static [Entry] {
        match self {
            DomainTag::KnowledgeSource => KNOWLEDGE_SOURCE,
            DomainTag::Conversation => CONVERSATION,
            DomainTag::Activity => ACTIVITY,
            DomainTag::Integration => INTEGRATION,
            DomainTag::Priority => PRIORITY,
            DomainTag::Risk => RISK,
            DomainTag::ThoughtConfidence => THOUGHT_CONFIDENCE,
            DomainTag::Signal => SIGNAL,
            DomainTag::ActivityKind => ACTIVITY_KIND,
            DomainTag::Sentiment => SENTIMENT,
            DomainTag::AccountStatus => ACCOUNT_STATUS,
            DomainTag::Tier => TIER,
        }
    }
}

impl std::fmt::Display for DomainTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a label within `domain`
///
/// Unknown labels get the neutral token. The separator transform applies
/// either way, so an unknown `waiting_on_customer` still displays as
/// "waiting on customer".
pub fn classify(domain: DomainTag, value: &str) -> PresentationToken {
    let text = label::transform(value);
    match domain.table().iter().find(|(label, _, _)| *label == value) {
        Some(&(_, color, icon)) => PresentationToken { color, icon, text },
        None => {
            log::debug!("unrecognized {} label '{}', using neutral token", domain, value);
            PresentationToken { text, ..PresentationToken::neutral() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect(domain: DomainTag, value: &str, color: ColorCategory, icon: Option<Icon>) {
        let token = classify(domain, value);
        assert_eq!(token.color, color, "{} '{}'", domain, value);
        assert_eq!(token.icon, icon, "{} '{}'", domain, value);
    }

    #[test]
    fn test_knowledge_source_table() {
        use DomainTag::KnowledgeSource as D;
        expect(D, "active", Green, Some(Icon::Check));
        expect(D, "syncing", Blue, Some(Icon::Sync));
        expect(D, "needs_update", Yellow, Some(Icon::Warning));
        expect(D, "error", Red, Some(Icon::Warning));
    }

    #[test]
    fn test_conversation_table() {
        use DomainTag::Conversation as D;
        expect(D, "escalated", Red, None);
        expect(D, "pending_agent", Yellow, None);
        expect(D, "in_progress", Blue, None);
        expect(D, "resolved", Green, None);
        expect(D, "monitoring", Purple, None);
    }

    #[test]
    fn test_activity_table() {
        use DomainTag::Activity as D;
        expect(D, "open", Red, None);
        expect(D, "completed", Green, None);
        expect(D, "in_progress", Yellow, None);
        expect(D, "failed", Red, None);
    }

    #[test]
    fn test_integration_table() {
        use DomainTag::Integration as D;
        expect(D, "connected", Green, Some(Icon::Check));
        expect(D, "error", Red, Some(Icon::Alert));
        expect(D, "pending", Yellow, Some(Icon::Clock));
    }

    #[test]
    fn test_priority_and_risk_tables() {
        expect(DomainTag::Priority, "urgent", Red, Some(Icon::Warning));
        expect(DomainTag::Priority, "high", Orange, Some(Icon::Calendar));
        expect(DomainTag::Priority, "medium", Yellow, Some(Icon::Calendar));
        expect(DomainTag::Priority, "low", Gray, Some(Icon::Calendar));

        expect(DomainTag::Risk, "high", Red, None);
        expect(DomainTag::Risk, "medium", Yellow, None);
        expect(DomainTag::Risk, "low", Green, None);
    }

    #[test]
    fn test_remaining_tables() {
        expect(DomainTag::ThoughtConfidence, "High", Green, None);
        expect(DomainTag::ThoughtConfidence, "Medium", Yellow, None);
        expect(DomainTag::ThoughtConfidence, "Low", Red, None);

        for (label, color) in [("green", Green), ("yellow", Yellow), ("red", Red), ("blue", Blue)] {
            expect(DomainTag::Signal, label, color, None);
        }

        expect(DomainTag::ActivityKind, "support_ticket", Gray, Some(Icon::Alert));
        expect(DomainTag::ActivityKind, "login", Gray, Some(Icon::Check));
        expect(DomainTag::ActivityKind, "feature_request", Gray, Some(Icon::Clock));
        expect(DomainTag::ActivityKind, "payment", Gray, Some(Icon::TrendingDown));

        expect(DomainTag::Sentiment, "positive", Green, None);
        expect(DomainTag::Sentiment, "neutral", Gray, None);
        expect(DomainTag::Sentiment, "negative", Red, None);

        expect(DomainTag::AccountStatus, "Active", Green, None);
        expect(DomainTag::Tier, "Premium", Purple, None);
        expect(DomainTag::Tier, "Enterprise", Purple, None);
        expect(DomainTag::Tier, "Standard", Blue, None);
    }

    #[test]
    fn test_unknown_labels_are_neutral() {
        for domain in DomainTag::ALL {
            let token = classify(*domain, "definitely-not-a-label");
            assert!(token.is_neutral(), "{} should fall back to neutral", domain);
            assert_eq!(token.text, None);
        }
        // Sets are per domain, not unioned
        assert!(classify(DomainTag::Conversation, "active").is_neutral());
        assert!(classify(DomainTag::KnowledgeSource, "resolved").is_neutral());
        assert!(classify(DomainTag::Integration, "syncing").is_neutral());
        // Exact match only
        assert!(classify(DomainTag::Priority, "URGENT").is_neutral());
        assert!(classify(DomainTag::ThoughtConfidence, "high").is_neutral());
        assert!(classify(DomainTag::Risk, "").is_neutral());
    }

    #[test]
    fn test_unknown_label_keeps_text_transform() {
        let token = classify(DomainTag::Conversation, "waiting_on_customer");
        assert!(token.is_neutral());
        assert_eq!(token.text.as_deref(), Some("waiting on customer"));
    }

    #[test]
    fn test_text_transform() {
        let token = classify(DomainTag::KnowledgeSource, "needs_update");
        assert_eq!(token.color, Yellow);
        assert_eq!(token.text.as_deref(), Some("needs update"));
        assert_eq!(token.display("needs_update"), "needs update");

        let token = classify(DomainTag::Conversation, "escalated");
        assert_eq!(token.text, None);
        assert_eq!(token.display("escalated"), "escalated");
    }

    #[test]
    fn test_classify_is_idempotent() {
        for domain in DomainTag::ALL {
            for label in domain.labels() {
                assert_eq!(classify(*domain, label), classify(*domain, label));
            }
        }
    }

    #[test]
    fn test_table_labels_carry_text_only_when_separated() {
        for domain in DomainTag::ALL {
            assert!(!domain.labels().is_empty());
            for label in domain.labels() {
                let token = classify(*domain, label);
                assert_eq!(token.text.is_some(), label.contains(LABEL_SEPARATOR), "{} '{}'", domain, label);
            }
        }
    }

    #[test]
    fn test_domain_parse() {
        assert_eq!(DomainTag::parse("knowledge-source"), Some(DomainTag::KnowledgeSource));
        assert_eq!(DomainTag::parse("Knowledge_Source"), Some(DomainTag::KnowledgeSource));
        assert_eq!(DomainTag::parse(" priority "), Some(DomainTag::Priority));
        assert_eq!(DomainTag::parse("thought_confidence"), Some(DomainTag::ThoughtConfidence));
        assert_eq!(DomainTag::parse("status"), None);
        for domain in DomainTag::ALL {
            assert_eq!(DomainTag::parse(domain.as_str()), Some(*domain));
        }
    }

    #[test]
    fn test_token_serialization() {
        let token = classify(DomainTag::KnowledgeSource, "needs_update");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["color"], "yellow");
        assert_eq!(json["icon"], "warning");
        assert_eq!(json["text"], "needs update");

        let json = serde_json::to_value(classify(DomainTag::Risk, "low")).unwrap();
        assert_eq!(json["icon"], serde_json::Value::Null);
        assert!(json.get("text").is_none());
    }
}
