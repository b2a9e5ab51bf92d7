pub mod auth;
pub mod event;

use anyhow::{Result, anyhow};
use octocrab::Octocrab;
use tokio::runtime::Runtime;

use super::Assigner;
use crate::usecase::gate::PrTarget;

fn build_client(token: String, api_base: Option<String>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder().personal_token(token);
    if let Some(api) = api_base {
        builder = builder
            .base_uri(api)
            .map_err(|e| anyhow!("invalid GITHUB_API_URL: {e}"))?;
    }
    builder
        .build()
        .map_err(|e| anyhow!("failed to init GitHub client: {e}"))
}

pub async fn add_assignees(octo: &Octocrab, target: &PrTarget, assignees: &[String]) -> Result<()> {
    let logins: Vec<&str> = assignees.iter().map(String::as_str).collect();
    octo.issues(&target.owner, &target.repo)
        .add_assignees(target.number, &logins)
        .await
        .map_err(|e| anyhow!("GitHub add assignees for {target} failed: {e:?}"))?;
    Ok(())
}

/// Synchronous facade that owns its own single-threaded Tokio runtime.
///
/// The token is resolved when assigning, so skipped pull requests
/// never need one.
pub struct GithubAssigner {
    token_input: Option<String>,
    api_base: Option<String>,
    rt: Runtime,
}

impl GithubAssigner {
    pub fn new(token_input: Option<String>, api_base: Option<String>) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("failed to build tokio runtime: {e}"))?;
        Ok(Self {
            token_input,
            api_base,
            rt,
        })
    }
}

impl Assigner for GithubAssigner {
    fn add_assignees(&mut self, target: &PrTarget, assignees: &[String]) -> Result<()> {
        let token = auth::resolve_github_token(self.token_input.as_deref())?;
        let api_base = self.api_base.clone();
        self.rt.block_on(async move {
            // The client has to be built inside the runtime that drives it.
            let octo = build_client(token, api_base)?;
            add_assignees(&octo, target, assignees).await
        })
    }
}
