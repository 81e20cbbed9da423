use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create an empty HOME so no rc file is picked up
fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    (temp_dir, guard)
}

fn get_studio_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("service-studio").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd
}

#[test]
fn test_home_is_default_page() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Service Studio"))
        .stdout(predicate::str::contains("=== AI Performance Dashboard ==="))
        .stdout(predicate::str::contains("Escalations Prevented"))
        .stdout(predicate::str::contains("3 customers show churn risk"));
}

#[test]
fn test_customers_page() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["customers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proactive Customer Outreach (4 customers need attention)"))
        .stdout(predicate::str::contains("Sarah Johnson"))
        .stdout(predicate::str::contains("[high risk]"))
        .stdout(predicate::str::contains("[low risk]"))
        .stdout(predicate::str::contains("Total Customers"))
        .stdout(predicate::str::contains("[At-Risk for Churn]"));
}

#[test]
fn test_customer_profile() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["customers", "c001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Johnson (c001)"))
        .stdout(predicate::str::contains("[Active] [Premium]"))
        .stdout(predicate::str::contains("Payment method expired - needs update"))
        .stdout(predicate::str::contains("[in progress]"))
        .stdout(predicate::str::contains("2.1/5.0"))
        .stdout(predicate::str::contains("Priority: Resolve Payment Issue"));
}

#[test]
fn test_bare_customer_id_shows_profile() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["c002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Michael Chen (c002)"));
}

#[test]
fn test_conversations_page() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["conversations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Needs Attention (3) ==="))
        .stdout(predicate::str::contains("=== AI Handled (4) ==="))
        .stdout(predicate::str::contains("[pending agent]"))
        .stdout(predicate::str::contains("76% confidence"));
}

#[test]
fn test_conversation_with_transcript() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["conversations", "conv001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment method expired - urgent assistance needed"))
        .stdout(predicate::str::contains("=== Transcript ==="))
        .stdout(predicate::str::contains("Escalated to Human Agent"))
        .stdout(predicate::str::contains("(92% confidence)"))
        .stdout(predicate::str::contains("=== AI Thought Process ==="))
        .stdout(predicate::str::contains("[High]"));
}

#[test]
fn test_conversation_without_transcript() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["conv003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account access issues after password reset"))
        .stdout(predicate::str::contains("No transcript recorded."));
}

#[test]
fn test_ai_settings_page() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["ai-settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Knowledge Base ==="))
        .stdout(predicate::str::contains("[⚠ needs update]"))
        .stdout(predicate::str::contains("[✓ active]"))
        .stdout(predicate::str::contains("Intervention Rules (3 of 4 active)"))
        .stdout(predicate::str::contains("Then: notify supervisor"));
}

#[test]
fn test_integrations_page() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["integrations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[✓ connected]"))
        .stdout(predicate::str::contains("[! error]"))
        .stdout(predicate::str::contains("Genesys"))
        .stdout(predicate::str::contains("Twilio"));
}

#[test]
fn test_integrations_category_filter() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["integrations", "--category", "communication"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Integrations: Communication"))
        .stdout(predicate::str::contains("Microsoft Teams"))
        .stdout(predicate::str::contains("Twilio"))
        .stdout(predicate::str::contains("Jira").not());

    get_studio_cmd(&temp_dir)
        .args(&["integrations", "--category", "All"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jira"));
}

#[test]
fn test_nav() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-settings"))
        .stdout(predicate::str::contains("integrations"))
        .stdout(predicate::str::contains("Signed in as Admin User"));
}

#[test]
fn test_abbreviated_commands() {
    let (temp_dir, _guard) = setup_test_env();

    get_studio_cmd(&temp_dir)
        .args(&["cu", "c001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Johnson (c001)"));

    get_studio_cmd(&temp_dir)
        .args(&["int"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Integrations"));
}
