// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown ids, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for unexpected failures such as an unreadable config file.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Exit with a user error, listing near matches when there are any
pub fn user_error_with_suggestions(message: &str, suggestions: &[String]) -> ! {
    eprintln!("Error: {}", message);
    if !suggestions.is_empty() {
        eprintln!("Did you mean: {}?", suggestions.join(", "));
    }
    process::exit(1);
}

fn has_numeric_suffix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

/// Validate a customer ID (`c` followed by digits, e.g. c001)
pub fn validate_customer_id(id: &str) -> Result<(), String> {
    if has_numeric_suffix(id, "c") {
        Ok(())
    } else {
        Err(format!("Invalid customer ID: '{}'. Customer IDs look like c001.", id))
    }
}

/// Validate a conversation ID (`conv` followed by digits, e.g. conv001)
pub fn validate_conversation_id(id: &str) -> Result<(), String> {
    if has_numeric_suffix(id, "conv") {
        Ok(())
    } else {
        Err(format!("Invalid conversation ID: '{}'. Conversation IDs look like conv001.", id))
    }
}
