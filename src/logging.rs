use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the stdout subscriber. `RUST_LOG` wins over the given level.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pr_autoassign={log_level},octocrab=warn")));

    // The Actions log viewer adds its own timestamps.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_ansi(false)
        .init();
}

/// Report a failure as a workflow `::error::` command so the run is annotated.
pub fn workflow_error_command(message: &str) -> String {
    // Workflow commands are single-line; newlines and '%' must be escaped.
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
