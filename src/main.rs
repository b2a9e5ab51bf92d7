mod app;
mod domain;
mod error;
mod logging;
mod repo;
mod usecase;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use app::{App, AssignConfig, Outcome};
use error::AssignError;
use repo::github::GithubAssigner;
use repo::github::event::EventPayload;
use repo::memory::RecordingAssigner;

#[derive(Parser, Debug)]
#[command(author, version, about = "pr-autoassign — assign random reviewers to new pull requests", long_about = None)]
struct Args {
    /// GitHub token used for the assignment call (falls back to GITHUB_TOKEN, then `gh auth token`)
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Number of assignees to pick
    #[arg(long, env = "INPUT_NUMBER-OF-ASSIGNEES", default_value = "")]
    number_of_assignees: String,

    /// Newline-separated list of candidate logins
    #[arg(long, env = "INPUT_ASSIGNEE-POOL", default_value = "")]
    assignee_pool: String,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// GitHub API base URL (GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Seed the random source for a reproducible selection
    #[arg(long, env = "INPUT_SEED")]
    seed: Option<u64>,

    /// Pick and log assignees without calling GitHub
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Log level for this crate (overridden by RUST_LOG)
    #[arg(long, env = "INPUT_LOG-LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            tracing::error!("{message}");
            println!("{}", logging::workflow_error_command(&message));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let event_path = args.event_path.ok_or_else(|| {
        AssignError::config("No event payload found (set GITHUB_EVENT_PATH or --event-path)")
    })?;
    let event = EventPayload::load(&event_path)?;

    let rng = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let config = AssignConfig {
        number_of_assignees: args.number_of_assignees,
        assignee_pool: args.assignee_pool,
    };

    if args.dry_run {
        let mut app = App::new(RecordingAssigner::default(), rng, config);
        app.run(&event)?;
        for (target, assignees) in app.assigner().calls() {
            tracing::info!(
                "Dry run: would assign {} to {target}",
                assignees.join(", ")
            );
        }
        return Ok(());
    }

    let assigner = GithubAssigner::new(args.github_token, args.api_url)?;
    if let Outcome::Assigned { target, assignees } = App::new(assigner, rng, config).run(&event)? {
        tracing::debug!(%target, count = assignees.len(), "assignment complete");
    }
    Ok(())
}
