use service_studio::cli::error::{internal_error, user_error};
use service_studio::cli::run;
use service_studio::config::ConfigError;

/// Failures in the environment rather than in what the user typed
fn is_internal(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause.is::<ConfigError>() || cause.is::<std::io::Error>() || cause.is::<serde_json::Error>()
    })
}

fn main() {
    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    let env = env_logger::Env::new().filter_or("SERVICE_STUDIO_LOG", "warn");
    env_logger::Builder::from_env(env).format_timestamp(None).init();

    if let Err(e) = run() {
        if !is_internal(&e) {
            user_error(&e.to_string());
        }

        // Show error chain if available
        let mut message = e.to_string();
        let causes: Vec<String> = e.chain().skip(1).map(|cause| cause.to_string()).collect();
        if !causes.is_empty() {
            message.push_str("\n\nCaused by:");
            for (indent, cause) in causes.iter().enumerate() {
                message.push_str(&format!("\n{:indent$}  {}", "", cause, indent = indent + 1));
            }
        }
        internal_error(&message);
    }
}
