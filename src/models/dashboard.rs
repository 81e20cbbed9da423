use crate::classify::ColorCategory;
use serde::Serialize;

/// A titled card of label/value rows
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub accent: ColorCategory,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
    pub color: Option<ColorCategory>,
}

impl MetricRow {
    pub fn new(label: &str, value: &str) -> Self {
        Self { label: label.to_string(), value: value.to_string(), color: None }
    }

    pub fn colored(label: &str, value: &str, color: ColorCategory) -> Self {
        Self { color: Some(color), ..Self::new(label, value) }
    }
}

/// Colored callout line on an insight card
#[derive(Debug, Clone, Serialize)]
pub struct Callout {
    pub text: String,
    pub color: ColorCategory,
}

/// Sidebar navigation entry
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub command: String,
    pub label: String,
}
