use std::process::Command;

use anyhow::{Result, anyhow};

pub const GITHUB_TOKEN_KEY: &str = "github-token";

fn non_blank(source: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("GitHub token from {source} is empty after trimming"));
    }
    Ok(trimmed.to_string())
}

fn token_from_env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(raw) => non_blank(&format!("env {name}"), &raw).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(anyhow!("failed to read env {name}: {e}")),
    }
}

fn token_from_gh_auth_token() -> Result<String> {
    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);

    if let Ok(host) = std::env::var("GH_HOST") {
        let host = host.trim();
        if !host.is_empty() {
            cmd.args(["--hostname", host]);
        }
    }

    let output = cmd
        .output()
        .map_err(|e| anyhow!("failed to execute `gh auth token`: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "`gh auth token` failed (exit {}): {}",
            output.status,
            stderr.trim()
        ));
    }

    non_blank("`gh auth token`", &String::from_utf8_lossy(&output.stdout))
}

/// Resolve the token used for the assignment call.
///
/// Priority:
/// 1) the `github-token` input (flag or `INPUT_GITHUB-TOKEN`)
/// 2) `GITHUB_TOKEN`
/// 3) `gh auth token` (optionally with `GH_HOST`), for local runs
pub fn resolve_github_token(input: Option<&str>) -> Result<String> {
    if let Some(raw) = input {
        return non_blank(&format!("input {GITHUB_TOKEN_KEY}"), raw);
    }
    if let Some(token) = token_from_env_var("GITHUB_TOKEN")? {
        return Ok(token);
    }
    token_from_gh_auth_token().map_err(|e| {
        anyhow!("Input required and not supplied: {GITHUB_TOKEN_KEY} (no GITHUB_TOKEN either; {e})")
    })
}
