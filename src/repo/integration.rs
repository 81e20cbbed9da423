use crate::classify::ColorCategory;
use crate::models::{Integration, MetricRow};
use crate::repo::LookupError;

/// Category chips on the available integrations list; "All" disables the filter
pub const INTEGRATION_CATEGORIES: &[&str] = &[
    "All",
    "Support",
    "Communication",
    "CRM",
    "Contact Center",
    "Project Management",
];

/// Integration fixtures
pub struct IntegrationRepo;

impl IntegrationRepo {
    pub fn list_connected() -> Vec<Integration> {
        vec![
            connected(1, "Zendesk", "Customer support ticketing system", "Support", "connected", "2 minutes ago"),
            connected(2, "Slack", "Team communication and notifications", "Communication", "connected", "1 hour ago"),
            connected(3, "Salesforce", "Customer relationship management", "CRM", "error", "2 days ago"),
        ]
    }

    pub fn list_available() -> Vec<Integration> {
        vec![
            available(4, "Genesys", "Cloud contact center platform", "Contact Center", true),
            available(5, "HubSpot", "Marketing, sales, and service software", "CRM", false),
            available(6, "Microsoft Teams", "Business communication platform", "Communication", false),
            available(7, "Jira", "Issue and project tracking", "Project Management", false),
            available(8, "Intercom", "Customer messaging platform", "Support", true),
            available(9, "Twilio", "Communication APIs for SMS, voice, and video", "Communication", false),
        ]
    }

    /// Resolve a category name (case-insensitive) to its canonical spelling
    pub fn resolve_category(name: &str) -> Result<&'static str, LookupError> {
        INTEGRATION_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LookupError::UnknownCategory(name.to_string()))
    }

    /// Available integrations, optionally narrowed to one category
    pub fn list_available_in(category: Option<&str>) -> Result<Vec<Integration>, LookupError> {
        let all = Self::list_available();
        let category = match category {
            None => return Ok(all),
            Some(name) => Self::resolve_category(name)?,
        };
        if category == "All" {
            return Ok(all);
        }
        log::debug!("filtering available integrations by category {}", category);
        Ok(all.into_iter().filter(|i| i.category == category).collect())
    }

    pub fn stats() -> Vec<MetricRow> {
        let connected = Self::list_connected();
        let ok = connected.iter().filter(|i| i.status.as_deref() == Some("connected")).count();
        let failing = connected.iter().filter(|i| i.status.as_deref() == Some("error")).count();
        vec![
            MetricRow::colored("Connected", &ok.to_string(), ColorCategory::Green),
            MetricRow::colored("Need Attention", &failing.to_string(), ColorCategory::Red),
            MetricRow::colored("Available", &Self::list_available().len().to_string(), ColorCategory::Blue),
            MetricRow::colored("Auto Sync", "24/7", ColorCategory::Purple),
        ]
    }
}

fn connected(id: i64, name: &str, description: &str, category: &str, status: &str, last_sync: &str) -> Integration {
    Integration {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        status: Some(status.to_string()),
        last_sync: Some(last_sync.to_string()),
        popular: false,
    }
}

fn available(id: i64, name: &str, description: &str, category: &str, popular: bool) -> Integration {
    Integration {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        status: None,
        last_sync: None,
        popular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        let comms = IntegrationRepo::list_available_in(Some("communication")).unwrap();
        let names: Vec<_> = comms.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Microsoft Teams", "Twilio"]);

        assert_eq!(IntegrationRepo::list_available_in(Some("All")).unwrap().len(), 6);
        assert_eq!(IntegrationRepo::list_available_in(None).unwrap().len(), 6);
        assert_eq!(
            IntegrationRepo::list_available_in(Some("Payments")).unwrap_err(),
            LookupError::UnknownCategory("Payments".to_string())
        );
    }

    #[test]
    fn test_stats() {
        let stats = IntegrationRepo::stats();
        assert_eq!(stats[0].value, "2");
        assert_eq!(stats[1].value, "1");
        assert_eq!(stats[2].value, "6");
    }

    #[test]
    fn test_connected_have_status() {
        assert!(IntegrationRepo::list_connected().iter().all(|i| i.is_connected()));
        assert!(IntegrationRepo::list_available().iter().all(|i| !i.is_connected()));
    }
}
