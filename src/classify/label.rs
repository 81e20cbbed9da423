// Display text transform for raw labels

/// Character separating words in raw labels (`needs_update`, `pending_agent`)
pub const LABEL_SEPARATOR: char = '_';

/// Replace every separator with a space. Case is preserved.
pub fn humanize_label(label: &str) -> String {
    label.replace(LABEL_SEPARATOR, " ")
}

/// Transformed text, or None when the label displays as-is
pub(crate) fn transform(label: &str) -> Option<String> {
    label.contains(LABEL_SEPARATOR).then(|| humanize_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_label() {
        assert_eq!(humanize_label("needs_update"), "needs update");
        assert_eq!(humanize_label("escalate_to_human"), "escalate to human");
        assert_eq!(humanize_label("Pending_Agent"), "Pending Agent");
        assert_eq!(humanize_label("resolved"), "resolved");
        assert_eq!(humanize_label(""), "");
        assert_eq!(humanize_label("at-risk"), "at-risk");
    }

    #[test]
    fn test_transform() {
        assert_eq!(transform("in_progress").as_deref(), Some("in progress"));
        assert_eq!(transform("_"), Some(" ".to_string()));
        assert_eq!(transform("open"), None);
    }
}
