use crate::error::AssignError;

pub const NUMBER_OF_ASSIGNEES_KEY: &str = "number-of-assignees";
pub const ASSIGNEE_POOL_KEY: &str = "assignee-pool";

/// Split the newline-separated pool input into logins.
///
/// Each line is trimmed and blank lines are dropped, so a trailing newline
/// from a YAML block scalar does not add an empty candidate. Duplicates are
/// kept as written.
pub fn parse_pool(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|login| !login.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse the requested number of assignees from its decimal input text.
pub fn parse_count(raw: &str) -> Result<usize, AssignError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AssignError::config(format!(
            "Input required and not supplied: {NUMBER_OF_ASSIGNEES_KEY}"
        )));
    }
    trimmed.parse::<usize>().map_err(|_| {
        AssignError::config(format!(
            "Input {NUMBER_OF_ASSIGNEES_KEY} must be a non-negative integer, got {trimmed:?}"
        ))
    })
}

/// Reject a pool input that carries no logins at all.
pub fn require_pool(raw: &str) -> Result<Vec<String>, AssignError> {
    if raw.trim().is_empty() {
        return Err(AssignError::config(format!(
            "Input required and not supplied: {ASSIGNEE_POOL_KEY}"
        )));
    }
    Ok(parse_pool(raw))
}
