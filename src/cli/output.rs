// Output formatting utilities

use crate::classify::{
    classify, classify_confidence, ColorCategory, DomainTag, Icon, PresentationToken, ScoreMeter,
};
use crate::config::Config;
use crate::models::{
    Callout, ConversationSummary, ConversationThread, CustomerProfile, Integration,
    InterventionRule, KnowledgeSource, MessageKind, MetricCard, MetricRow, NavItem,
    OutreachCustomer, Sender, SignalCustomer,
};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// ANSI foreground colors (standard 16-color palette)
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";
// No orange in the 16-color palette
const ANSI_FG_ORANGE: &str = "\x1b[38;5;208m";

/// Cells in a drawn score meter
const METER_CELLS: usize = 20;
const METER_FILLED: char = '█';
const METER_EMPTY: char = '░';

/// Narrowest width text is wrapped to
const MIN_WRAP_WIDTH: usize = 20;

/// Map a color category to its ANSI foreground constant
fn color_fg(color: ColorCategory) -> &'static str {
    match color {
        ColorCategory::Green => ANSI_FG_GREEN,
        ColorCategory::Yellow => ANSI_FG_YELLOW,
        ColorCategory::Red => ANSI_FG_RED,
        ColorCategory::Blue => ANSI_FG_BLUE,
        ColorCategory::Purple => ANSI_FG_MAGENTA,
        ColorCategory::Orange => ANSI_FG_ORANGE,
        ColorCategory::Gray => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Terminal glyph for an icon
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Check => "✓",
        Icon::Alert => "!",
        Icon::Warning => "⚠",
        Icon::Clock => "◷",
        Icon::Sync => "↻",
        Icon::Calendar => "▦",
        Icon::TrendingDown => "↘",
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// How a page is drawn: whether to emit ANSI escapes, and how wide to wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub width: usize,
}

impl OutputStyle {
    pub fn plain(width: usize) -> Self {
        Self { color: false, width }
    }

    /// Resolve color and width from the rc file and the terminal
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.color.enabled(is_tty()),
            width: config.width.unwrap_or_else(get_terminal_width),
        }
    }

    pub fn paint(&self, text: &str, color: ColorCategory) -> String {
        if self.color {
            format!("{}{}{}", color_fg(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// `[⚠ needs update]` in the token's color
    pub fn badge(&self, token: &PresentationToken, raw: &str) -> String {
        let label = match token.icon {
            Some(icon) => format!("{} {}", icon_glyph(icon), token.display(raw)),
            None => token.display(raw).to_string(),
        };
        self.paint(&format!("[{}]", label), token.color)
    }

    fn heading(&self, title: &str) -> String {
        format!("{}\n", self.bold(&format!("=== {} ===", title)))
    }

    /// Filled bar followed by the value, e.g. `████████░░ 78%`
    pub fn meter(&self, meter: &ScoreMeter) -> String {
        let filled = meter.filled_cells(METER_CELLS);
        let bar: String = std::iter::repeat(METER_FILLED)
            .take(filled)
            .chain(std::iter::repeat(METER_EMPTY).take(METER_CELLS - filled))
            .collect();
        format!("{} {}", self.paint(&bar, meter.color), meter.display_value())
    }

    fn wrap_width(&self, indent: usize) -> usize {
        self.width.saturating_sub(indent).max(MIN_WRAP_WIDTH)
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shorten text to `max` characters, marking the cut with `..`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 2 {
        return ".".repeat(max);
    }
    let kept: String = text.chars().take(max - 2).collect();
    format!("{}..", kept)
}

fn push_wrapped(output: &mut String, text: &str, indent: usize, style: &OutputStyle) {
    let pad = " ".repeat(indent);
    for line in wrap_text(text, style.wrap_width(indent)) {
        output.push_str(&format!("{}{}\n", pad, line));
    }
}

fn format_rows(rows: &[MetricRow], style: &OutputStyle) -> String {
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let mut output = String::new();
    for row in rows {
        let value = match row.color {
            Some(color) => style.paint(&row.value, color),
            None => row.value.clone(),
        };
        output.push_str(&format!("  {:<width$}  {}\n", row.label, value, width = label_width));
    }
    output
}

fn format_card(card: &MetricCard, style: &OutputStyle) -> String {
    let mut output = format!("{}\n", style.bold(&style.paint(&card.title, card.accent)));
    output.push_str(&format_rows(&card.rows, style));
    output
}

fn format_callouts(callouts: &[Callout], style: &OutputStyle) -> String {
    callouts
        .iter()
        .map(|c| format!("  {} {}\n", style.paint("●", c.color), c.text))
        .collect()
}

fn format_prompt(placeholder: &str, suggestions: &[&str]) -> String {
    let mut output = format!("> {}\n", placeholder);
    if !suggestions.is_empty() {
        let quoted: Vec<String> = suggestions.iter().map(|s| format!("\"{}\"", s)).collect();
        output.push_str(&format!("  {}\n", quoted.join("  ")));
    }
    output
}

/// Welcome page with the AI performance dashboard
pub fn format_home(
    placeholder: &str,
    suggestions: &[&str],
    cards: &[MetricCard],
    insights: &[Callout],
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold("Welcome to Service Studio")));
    output.push_str("AI-powered customer service management dashboard\n\n");
    output.push_str(&format_prompt(placeholder, suggestions));
    output.push('\n');

    output.push_str(&style.heading("AI Performance Dashboard"));
    for card in cards {
        output.push_str(&format_card(card, style));
        output.push('\n');
    }

    output.push_str(&style.heading("AI Insights & Recommendations"));
    output.push_str(&format_callouts(insights, style));
    output
}

/// Customers page: lookup box, outreach list, quick stats and AI signals
pub fn format_customers(
    placeholder: &str,
    suggestions: &[&str],
    outreach: &[OutreachCustomer],
    stats: &[MetricRow],
    signals: &[SignalCustomer],
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold("Customers")));
    output.push_str("Manage customer relationships and proactive outreach\n\n");

    output.push_str(&style.heading("Customer Lookup"));
    output.push_str(&format_prompt(placeholder, &[]));
    output.push_str(&format!("  {}\n\n", suggestions.join(" | ")));

    output.push_str(&style.heading(&format!(
        "Proactive Customer Outreach ({} customers need attention)",
        outreach.len()
    )));
    if outreach.is_empty() {
        output.push_str("No customers need attention.\n");
    }
    for customer in outreach {
        let priority = customer.priority_token();
        let glyph = priority.icon.map(icon_glyph).unwrap_or(" ");
        let risk = customer.risk_token();
        let risk_label = format!("{} risk", risk.display(&customer.risk_level));
        output.push_str(&format!(
            "{} {}  {}  {}\n",
            style.paint(glyph, priority.color),
            customer.id,
            style.bold(&customer.name),
            style.paint(&format!("[{}]", risk_label), risk.color),
        ));
        output.push_str(&format!("      {}\n", customer.company));
        output.push_str(&format!("      {}\n", customer.issue));
        output.push_str(&format!("      Last contact: {}\n", customer.last_contact));
    }
    output.push('\n');

    output.push_str(&style.heading("Quick Stats"));
    output.push_str(&format_rows(stats, style));
    output.push('\n');

    output.push_str(&style.heading("AI-Recommended Customer Actions"));
    for signal in signals {
        output.push_str(&format!(
            "  {}  {} <{}>  {}  -> {}\n",
            crate::models::initials(&signal.name),
            signal.name,
            signal.email,
            style.paint(&format!("[{}]", signal.signal_text), signal.signal_token().color),
            signal.action_text,
        ));
    }
    output
}

/// One customer's profile page
pub fn format_customer_detail(profile: &CustomerProfile, style: &OutputStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {} ({})\n",
        style.bold(&profile.initials()),
        style.bold(&profile.name),
        profile.id
    ));
    output.push_str(&format!("{}\n", profile.company));
    output.push_str(&format!(
        "{} {}\n\n",
        style.badge(&profile.status_token(), &profile.status),
        style.badge(&profile.tier_token(), &profile.tier),
    ));

    output.push_str(&style.heading("Profile"));
    output.push_str(&format_rows(
        &[
            MetricRow::new("Email", &profile.email),
            MetricRow::new("Phone", &profile.phone),
            MetricRow::new("Location", &profile.location),
            MetricRow::new("Account Value", &profile.account_value),
            MetricRow::new("Customer Since", &profile.join_date),
        ],
        style,
    ));
    output.push('\n');

    output.push_str(&style.heading("Recent Activities"));
    if profile.activities.is_empty() {
        output.push_str("No recent activity.\n");
    }
    for activity in &profile.activities {
        let kind = activity.kind_token();
        let glyph = kind.icon.map(icon_glyph).unwrap_or("-");
        output.push_str(&format!(
            "  {} {}  {}\n",
            style.paint(glyph, kind.color),
            activity.title,
            style.badge(&activity.status_token(), &activity.status),
        ));
        output.push_str(&format!("    {}\n", style.paint(&activity.timestamp, ColorCategory::Gray)));
    }
    output.push('\n');

    output.push_str(&style.heading("AI Insights"));
    for insight in &profile.insights {
        output.push_str(&format!("  {}\n", style.bold(&insight.title)));
        push_wrapped(&mut output, &insight.summary, 4, style);
        output.push_str(&format!("    {}  {}\n", insight.meter_label, style.meter(&insight.meter)));
    }
    output.push('\n');

    output.push_str(&style.heading("AI Recommended Actions"));
    for action in &profile.actions {
        output.push_str(&format!(
            "  {}  {}\n",
            style.bold(&action.title),
            style.paint(&format!("[{}]", action.button), action.color),
        ));
        push_wrapped(&mut output, &action.detail, 4, style);
    }
    output
}

fn format_conversation_line(conv: &ConversationSummary, style: &OutputStyle) -> String {
    let mut badges = vec![style.badge(&conv.status_token(), &conv.status)];
    if let Some(priority) = conv.priority_token() {
        let raw = conv.priority.as_deref().unwrap_or_default();
        badges.insert(0, style.badge(&priority, raw));
    }
    if let (Some(score), Some(token)) = (conv.confidence, conv.confidence_token()) {
        badges.push(style.paint(&format!("{}% confidence", score), token.color));
    }

    let mut output = format!("{}  {}  {}\n", conv.id, style.bold(&conv.customer), badges.join(" "));
    output.push_str(&format!("      {}\n", truncate(&conv.subject, style.wrap_width(6))));
    output.push_str(&format!(
        "      {}\n",
        style.paint(&truncate(&conv.last_message, style.wrap_width(6)), ColorCategory::Gray)
    ));
    let mut meta = vec![conv.timestamp.clone(), format!("{} messages", conv.message_count)];
    if let Some(agent) = &conv.agent_assigned {
        meta.push(format!("Agent: {}", agent));
    }
    output.push_str(&format!("      {}\n", meta.join(" | ")));
    output
}

/// Conversations page: both lists and their totals
pub fn format_conversations(
    stats: &[MetricRow],
    attention: &[ConversationSummary],
    ai_handled: &[ConversationSummary],
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold("Conversations")));
    output.push_str("Monitor and manage customer conversations\n\n");
    output.push_str(&format_rows(stats, style));
    output.push('\n');

    output.push_str(&style.heading(&format!("Needs Attention ({})", attention.len())));
    if attention.is_empty() {
        output.push_str("No conversations need attention.\n");
    }
    for conv in attention {
        output.push_str(&format_conversation_line(conv, style));
    }
    output.push('\n');

    output.push_str(&style.heading(&format!("AI Handled ({})", ai_handled.len())));
    if ai_handled.is_empty() {
        output.push_str("No AI-handled conversations.\n");
    }
    for conv in ai_handled {
        output.push_str(&format_conversation_line(conv, style));
    }
    output
}

/// One conversation: summary header, then the transcript when one is recorded
pub fn format_conversation_detail(
    summary: &ConversationSummary,
    thread: Option<&ConversationThread>,
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold(&summary.subject)));

    let mut badges = Vec::new();
    if let (Some(raw), Some(token)) = (summary.priority.as_deref(), summary.priority_token()) {
        badges.push(style.badge(&token, raw));
    }
    badges.push(style.badge(&summary.status_token(), &summary.status));
    let started = match thread {
        Some(t) => t.created_at.format("%Y-%m-%d %I:%M %p").to_string(),
        None => summary.timestamp.clone(),
    };
    output.push_str(&format!("{} | {} ({})  {}\n\n", summary.customer, started, summary.id, badges.join(" ")));

    let Some(thread) = thread else {
        output.push_str("No transcript recorded.\n");
        return output;
    };

    output.push_str(&style.heading("Transcript"));
    for message in &thread.messages {
        let author = match message.sender {
            Sender::Customer => summary.customer.as_str(),
            Sender::Ai => "AI Assistant",
            Sender::Agent => summary.agent_assigned.as_deref().unwrap_or("Agent"),
        };
        let mut header = format!(
            "[{}] {}",
            message.timestamp.format("%I:%M %p"),
            style.bold(author)
        );
        if let Some(score) = message.confidence {
            let token = classify_confidence(f64::from(score));
            header.push_str(&format!(" {}", style.paint(&format!("({}% confidence)", score), token.color)));
        }
        output.push_str(&format!("{}\n", header));
        if message.kind == MessageKind::Escalation {
            output.push_str(&format!(
                "  {}\n",
                style.paint(&format!("{} Escalated to Human Agent", icon_glyph(Icon::Warning)), ColorCategory::Orange)
            ));
        }
        push_wrapped(&mut output, &message.content, 2, style);
    }
    output.push('\n');

    output.push_str(&style.heading("Customer Info"));
    let contact = &thread.contact;
    output.push_str(&format!("  {}\n", style.bold(&contact.name)));
    output.push_str(&format!("  {}\n", contact.email));
    output.push_str(&format!("  {}\n", contact.company));
    output.push_str(&format!(
        "  {} {}\n\n",
        style.badge(&classify(DomainTag::Tier, &contact.tier), &contact.tier),
        style.badge(&classify(DomainTag::AccountStatus, &contact.status), &contact.status),
    ));

    output.push_str(&style.heading("AI Thought Process"));
    for step in &thread.thoughts {
        output.push_str(&format!(
            "  {} {}  {}\n",
            step.timestamp.format("%I:%M %p"),
            style.bold(&step.action),
            style.badge(&step.confidence_token(), &step.confidence),
        ));
        push_wrapped(&mut output, &step.thought, 4, style);
    }
    output
}

fn format_knowledge_source(source: &KnowledgeSource, style: &OutputStyle) -> String {
    format!(
        "  {}  {}\n    {} | {} articles | {}% accuracy | updated {}\n",
        style.bold(&source.name),
        style.badge(&source.status_token(), &source.status),
        source.source_type,
        source.articles,
        source.accuracy,
        source.last_updated,
    )
}

fn format_rule(rule: &InterventionRule, style: &OutputStyle) -> String {
    let state = if rule.is_active {
        style.paint("[active]", ColorCategory::Green)
    } else {
        style.paint("[inactive]", ColorCategory::Gray)
    };
    let mut output = format!("  {}  {}\n", style.bold(&rule.name), state);
    push_wrapped(&mut output, &rule.description, 4, style);
    output.push_str(&format!("    When: {}\n", rule.condition));
    output.push_str(&format!(
        "    Then: {} (triggered {} times)\n",
        rule.action_label(),
        rule.triggered_count
    ));
    output
}

/// AI agent settings page: knowledge base, intervention rules, performance
pub fn format_ai_settings(
    sources: &[KnowledgeSource],
    rules: &[InterventionRule],
    metrics: &[MetricRow],
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold("AI Agent Settings")));
    output.push_str("Configure knowledge sources and intervention rules\n\n");

    output.push_str(&style.heading("Knowledge Base"));
    for source in sources {
        output.push_str(&format_knowledge_source(source, style));
    }
    output.push('\n');

    let active = rules.iter().filter(|r| r.is_active).count();
    output.push_str(&style.heading(&format!("Intervention Rules ({} of {} active)", active, rules.len())));
    for rule in rules {
        output.push_str(&format_rule(rule, style));
    }
    output.push('\n');

    output.push_str(&style.heading("Performance"));
    output.push_str(&format_rows(metrics, style));
    output
}

/// Integrations page; `category` names the filter applied to the available list
pub fn format_integrations(
    stats: &[MetricRow],
    connected: &[Integration],
    available: &[Integration],
    category: Option<&str>,
    style: &OutputStyle,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style.bold("Integrations")));
    output.push_str("Connect your favorite tools and services\n\n");
    output.push_str(&format_rows(stats, style));
    output.push('\n');

    output.push_str(&style.heading("Connected"));
    for integration in connected {
        let badge = match (integration.status.as_deref(), integration.status_token()) {
            (Some(raw), Some(token)) => style.badge(&token, raw),
            _ => String::new(),
        };
        output.push_str(&format!("  {}  {}\n", style.bold(&integration.name), badge));
        output.push_str(&format!("    {}\n", integration.description));
        if let Some(last_sync) = &integration.last_sync {
            output.push_str(&format!("    {}\n", style.paint(&format!("Last sync: {}", last_sync), ColorCategory::Gray)));
        }
    }
    output.push('\n');

    let title = match category {
        Some(c) if c != "All" => format!("Available Integrations: {}", c),
        _ => "Available Integrations".to_string(),
    };
    output.push_str(&style.heading(&title));
    if available.is_empty() {
        output.push_str("No integrations in this category.\n");
    }
    for integration in available {
        let popular = if integration.popular {
            format!("  {}", style.paint("[Popular]", ColorCategory::Orange))
        } else {
            String::new()
        };
        output.push_str(&format!(
            "  {}  {}{}\n",
            style.bold(&integration.name),
            style.paint(&integration.category, ColorCategory::Gray),
            popular
        ));
        output.push_str(&format!("    {}\n", integration.description));
    }
    output
}

/// Sidebar navigation: one line per page command
pub fn format_nav(items: &[NavItem], user: &str, style: &OutputStyle) -> String {
    let width = items.iter().map(|i| i.command.len()).max().unwrap_or(0);
    let mut output = format!("{}\n", style.bold("Service Studio"));
    for item in items {
        output.push_str(&format!("  {:<width$}  {}\n", item.command, item.label, width = width));
    }
    output.push_str(&format!("\nSigned in as {}\n", user));
    output
}

/// Every field of a token, then the badge it draws
pub fn format_token(domain: &str, value: &str, token: &PresentationToken, style: &OutputStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("domain: {}\n", domain));
    output.push_str(&format!("value:  {}\n", value));
    output.push_str(&format!("color:  {}\n", token.color.as_str()));
    output.push_str(&format!("icon:   {}\n", token.icon.map(|i| i.as_str()).unwrap_or("none")));
    output.push_str(&format!("text:   {}\n", token.display(value)));
    output.push_str(&format!("{}\n", style.badge(token, value)));
    output
}

/// A domain's closed label set with the badge each label draws
pub fn format_domain_labels(domain: DomainTag, style: &OutputStyle) -> String {
    let labels = domain.labels();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut output = style.heading(domain.as_str());
    for label in labels {
        let token = classify(domain, label);
        output.push_str(&format!("  {:<width$}  {}\n", label, style.badge(&token, label), width = width));
    }
    output
}
