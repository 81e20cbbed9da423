use clap::{Parser, Subcommand};
use crate::classify::{classify, classify_confidence, DomainTag};
use crate::cli::abbrev;
use crate::cli::error::{user_error, user_error_with_suggestions, validate_conversation_id, validate_customer_id};
use crate::cli::output::{
    format_ai_settings, format_conversation_detail, format_conversations, format_customer_detail,
    format_customers, format_domain_labels, format_home, format_integrations, format_nav,
    format_token, OutputStyle,
};
use crate::config::Config;
use crate::repo::{ConversationRepo, CustomerRepo, DashboardRepo, IntegrationRepo, SettingsRepo, INTEGRATION_CATEGORIES};
use crate::utils::fuzzy;
use anyhow::{Context, Result};

/// Pseudo-domain of `classify` that buckets a numeric AI confidence score
const CONFIDENCE_DOMAIN: &str = "confidence";

/// Edit distance allowed when suggesting ids, domains and categories
const SUGGESTION_DISTANCE: usize = 3;

#[derive(Parser)]
#[command(name = "service-studio")]
#[command(about = "Service Studio - AI-powered customer service management dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Welcome page with the AI performance dashboard
    Home {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Proactive outreach list, or one customer's profile
    Customers {
        /// Customer ID (e.g., c001)
        id: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Conversations needing attention and AI-handled, or one conversation
    Conversations {
        /// Conversation ID (e.g., conv001)
        id: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// AI agent knowledge base, intervention rules and performance
    #[command(name = "ai-settings")]
    AiSettings {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Connected and available integrations
    Integrations {
        /// Only list available integrations in this category (e.g., CRM)
        #[arg(long)]
        category: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Sidebar navigation
    Nav {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show how a label (or confidence score) is presented
    ///
    /// With no arguments, lists every domain. With only a domain, lists its labels.
    Classify {
        /// Domain name (e.g., knowledge-source, priority, confidence)
        domain: Option<String>,
        /// Raw label, or a score for the confidence domain
        value: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        match Cli::try_parse_from(std::env::args()) {
            Ok(_) => return Ok(()),
            Err(_) => {
                println!("service-studio {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
        }
    }

    args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };

    // Implicit page for a bare id (c001 -> customers c001)
    if let Some(first) = args.first() {
        if validate_conversation_id(first).is_ok() {
            args.insert(0, "conversations".to_string());
        } else if validate_customer_id(first).is_ok() {
            args.insert(0, "customers".to_string());
        }
    }

    // Home is the default page
    if args.is_empty() || (args[0].starts_with("--") && args.iter().all(|a| a == "--json")) {
        args.insert(0, "home".to_string());
    }

    let clap_args = std::iter::once("service-studio".to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>();
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            // Help and version go to stdout and are not failures
            if e.use_stderr() {
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    let config = Config::load().context("Failed to load configuration")?;
    let style = OutputStyle::from_config(&config);
    log::debug!("rendering with {:?}", style);

    handle_command(cli, &style)
}

fn handle_command(cli: Cli, style: &OutputStyle) -> Result<()> {
    match cli.command {
        Commands::Home { json } => handle_home(json, style),
        Commands::Customers { id: None, json } => handle_customers(json, style),
        Commands::Customers { id: Some(id), json } => handle_customer_detail(&id, json, style),
        Commands::Conversations { id: None, json } => handle_conversations(json, style),
        Commands::Conversations { id: Some(id), json } => handle_conversation_detail(&id, json, style),
        Commands::AiSettings { json } => handle_ai_settings(json, style),
        Commands::Integrations { category, json } => handle_integrations(category.as_deref(), json, style),
        Commands::Nav { json } => handle_nav(json, style),
        Commands::Classify { domain, value, json } => {
            handle_classify(domain.as_deref(), value.as_deref(), json, style)
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_home(json: bool, style: &OutputStyle) -> Result<()> {
    let cards = DashboardRepo::metric_cards();
    let insights = DashboardRepo::insights();
    let suggestions = DashboardRepo::command_suggestions();

    if json {
        return print_json(&serde_json::json!({
            "placeholder": DashboardRepo::command_placeholder(),
            "suggestions": suggestions,
            "metric_cards": cards,
            "insights": insights,
        }));
    }

    print!("{}", format_home(DashboardRepo::command_placeholder(), &suggestions, &cards, &insights, style));
    Ok(())
}

fn handle_customers(json: bool, style: &OutputStyle) -> Result<()> {
    let outreach = CustomerRepo::list_outreach();
    let stats = CustomerRepo::quick_stats();
    let signals = CustomerRepo::list_signals();

    if json {
        let json_outreach: Vec<serde_json::Value> = outreach.iter().map(|customer| {
            serde_json::json!({
                "customer": customer,
                "risk": customer.risk_token(),
                "priority": customer.priority_token(),
            })
        }).collect();
        let json_signals: Vec<serde_json::Value> = signals.iter().map(|signal| {
            serde_json::json!({
                "customer": signal,
                "token": signal.signal_token(),
            })
        }).collect();
        return print_json(&serde_json::json!({
            "outreach": json_outreach,
            "stats": stats,
            "signals": json_signals,
        }));
    }

    print!(
        "{}",
        format_customers(
            CustomerRepo::lookup_placeholder(),
            &CustomerRepo::lookup_suggestions(),
            &outreach,
            &stats,
            &signals,
            style,
        )
    );
    Ok(())
}

fn handle_customer_detail(id: &str, json: bool, style: &OutputStyle) -> Result<()> {
    if let Err(e) = validate_customer_id(id) {
        user_error(&e);
    }
    let profile = match CustomerRepo::require(id) {
        Ok(profile) => profile,
        Err(e) => {
            let suggestions = fuzzy::suggest(id, &CustomerRepo::ids(), SUGGESTION_DISTANCE);
            user_error_with_suggestions(&e.to_string(), &suggestions);
        }
    };

    if json {
        let activities: Vec<serde_json::Value> = profile.activities.iter().map(|activity| {
            serde_json::json!({
                "activity": activity,
                "status": activity.status_token(),
                "kind": activity.kind_token(),
            })
        }).collect();
        return print_json(&serde_json::json!({
            "customer": profile,
            "status": profile.status_token(),
            "tier": profile.tier_token(),
            "activities": activities,
        }));
    }

    print!("{}", format_customer_detail(&profile, style));
    Ok(())
}

fn handle_conversations(json: bool, style: &OutputStyle) -> Result<()> {
    let stats = ConversationRepo::summary_stats();
    let attention = ConversationRepo::list_needing_attention();
    let ai_handled = ConversationRepo::list_ai_handled();

    if json {
        let annotate = |list: &[crate::models::ConversationSummary]| -> Vec<serde_json::Value> {
            list.iter().map(|conv| {
                serde_json::json!({
                    "conversation": conv,
                    "status": conv.status_token(),
                    "priority": conv.priority_token(),
                    "confidence": conv.confidence_token(),
                })
            }).collect()
        };
        return print_json(&serde_json::json!({
            "stats": stats,
            "needs_attention": annotate(&attention),
            "ai_handled": annotate(&ai_handled),
        }));
    }

    print!("{}", format_conversations(&stats, &attention, &ai_handled, style));
    Ok(())
}

fn handle_conversation_detail(id: &str, json: bool, style: &OutputStyle) -> Result<()> {
    if let Err(e) = validate_conversation_id(id) {
        user_error(&e);
    }
    let summary = match ConversationRepo::require_summary(id) {
        Ok(summary) => summary,
        Err(e) => {
            let suggestions = fuzzy::suggest(id, &ConversationRepo::ids(), SUGGESTION_DISTANCE);
            user_error_with_suggestions(&e.to_string(), &suggestions);
        }
    };
    let thread = ConversationRepo::get_thread(id);

    if json {
        let thoughts: Vec<serde_json::Value> = thread.iter().flat_map(|t| &t.thoughts).map(|step| {
            serde_json::json!({
                "step": step,
                "confidence": step.confidence_token(),
            })
        }).collect();
        return print_json(&serde_json::json!({
            "conversation": summary,
            "status": summary.status_token(),
            "priority": summary.priority_token(),
            "contact": thread.as_ref().map(|t| &t.contact),
            "created_at": thread.as_ref().map(|t| t.created_at),
            "messages": thread.as_ref().map(|t| &t.messages),
            "thoughts": thoughts,
        }));
    }

    print!("{}", format_conversation_detail(&summary, thread.as_ref(), style));
    Ok(())
}

fn handle_ai_settings(json: bool, style: &OutputStyle) -> Result<()> {
    let sources = SettingsRepo::list_knowledge_sources();
    let rules = SettingsRepo::list_intervention_rules();
    let metrics = SettingsRepo::performance_metrics();

    if json {
        let json_sources: Vec<serde_json::Value> = sources.iter().map(|source| {
            serde_json::json!({
                "source": source,
                "status": source.status_token(),
            })
        }).collect();
        let json_rules: Vec<serde_json::Value> = rules.iter().map(|rule| {
            serde_json::json!({
                "rule": rule,
                "action_label": rule.action_label(),
            })
        }).collect();
        return print_json(&serde_json::json!({
            "knowledge_sources": json_sources,
            "intervention_rules": json_rules,
            "performance": metrics,
        }));
    }

    print!("{}", format_ai_settings(&sources, &rules, &metrics, style));
    Ok(())
}

fn handle_integrations(category: Option<&str>, json: bool, style: &OutputStyle) -> Result<()> {
    let available = match IntegrationRepo::list_available_in(category) {
        Ok(list) => list,
        Err(e) => {
            let suggestions = fuzzy::suggest(category.unwrap_or_default(), INTEGRATION_CATEGORIES, SUGGESTION_DISTANCE);
            user_error_with_suggestions(&e.to_string(), &suggestions);
        }
    };
    // Canonical spelling for the heading; already validated above
    let category = category.and_then(|c| IntegrationRepo::resolve_category(c).ok());
    let connected = IntegrationRepo::list_connected();
    let stats = IntegrationRepo::stats();

    if json {
        let json_connected: Vec<serde_json::Value> = connected.iter().map(|integration| {
            serde_json::json!({
                "integration": integration,
                "status": integration.status_token(),
            })
        }).collect();
        return print_json(&serde_json::json!({
            "stats": stats,
            "connected": json_connected,
            "category": category.unwrap_or("All"),
            "available": available,
        }));
    }

    print!("{}", format_integrations(&stats, &connected, &available, category, style));
    Ok(())
}

fn handle_nav(json: bool, style: &OutputStyle) -> Result<()> {
    let items = DashboardRepo::nav_items();
    if json {
        return print_json(&serde_json::json!({
            "items": items,
            "user": DashboardRepo::current_user(),
        }));
    }
    print!("{}", format_nav(&items, DashboardRepo::current_user(), style));
    Ok(())
}

fn domain_names() -> Vec<&'static str> {
    DomainTag::ALL
        .iter()
        .map(|d| d.as_str())
        .chain(std::iter::once(CONFIDENCE_DOMAIN))
        .collect()
}

fn handle_classify(domain: Option<&str>, value: Option<&str>, json: bool, style: &OutputStyle) -> Result<()> {
    let Some(domain_name) = domain else {
        if json {
            let domains: Vec<serde_json::Value> = DomainTag::ALL.iter().map(|d| {
                serde_json::json!({ "domain": d.as_str(), "labels": d.labels() })
            }).collect();
            return print_json(&serde_json::json!({ "domains": domains }));
        }
        for domain in DomainTag::ALL {
            println!("{:<20} {}", domain.as_str(), domain.labels().join(", "));
        }
        println!("{:<20} <score 0-100>", CONFIDENCE_DOMAIN);
        return Ok(());
    };

    if domain_name.eq_ignore_ascii_case(CONFIDENCE_DOMAIN) {
        let Some(raw) = value else {
            user_error("The confidence domain needs a score (e.g., classify confidence 88)");
        };
        let score: f64 = match raw.trim().parse() {
            Ok(score) => score,
            Err(_) => user_error(&format!("Invalid confidence score: '{}'", raw)),
        };
        let token = classify_confidence(score);
        if json {
            return print_json(&serde_json::json!({
                "domain": CONFIDENCE_DOMAIN,
                "value": score,
                "token": token,
            }));
        }
        print!("{}", format_token(CONFIDENCE_DOMAIN, raw, &token, style));
        return Ok(());
    }

    let Some(domain) = DomainTag::parse(domain_name) else {
        let suggestions = fuzzy::suggest(domain_name, &domain_names(), SUGGESTION_DISTANCE);
        user_error_with_suggestions(&format!("Unknown domain '{}'", domain_name), &suggestions);
    };

    let Some(value) = value else {
        if json {
            let labels: Vec<serde_json::Value> = domain.labels().into_iter().map(|label| {
                serde_json::json!({ "label": label, "token": classify(domain, label) })
            }).collect();
            return print_json(&serde_json::json!({ "domain": domain.as_str(), "labels": labels }));
        }
        print!("{}", format_domain_labels(domain, style));
        return Ok(());
    };

    let token = classify(domain, value);
    if json {
        return print_json(&serde_json::json!({
            "domain": domain.as_str(),
            "value": value,
            "token": token,
        }));
    }
    print!("{}", format_token(domain.as_str(), value, &token, style));
    Ok(())
}
