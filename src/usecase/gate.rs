use crate::error::AssignError;
use crate::repo::github::event::{EventPayload, PullRequest};

/// The pull request an eligible event points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrTarget {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub author: String,
}

impl PrTarget {
    pub fn new(event: &EventPayload, pr: &PullRequest) -> Result<Self, AssignError> {
        let repo = event
            .repository
            .as_ref()
            .ok_or_else(|| AssignError::config("Event payload has no repository"))?;
        Ok(Self {
            owner: repo.owner.login.clone(),
            repo: repo.name.clone(),
            number: pr.number,
            author: pr.user.login.clone(),
        })
    }
}

impl std::fmt::Display for PrTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Applicability<'a> {
    NotApplicable,
    Draft,
    AlreadyAssigned,
    Eligible(&'a PullRequest),
}

/// Decide whether the event should get assignees.
/// Rules, first match wins: no pull request, draft, already assigned.
pub fn evaluate(event: &EventPayload) -> Applicability<'_> {
    let Some(pr) = event.pull_request.as_ref() else {
        return Applicability::NotApplicable;
    };
    if pr.draft {
        return Applicability::Draft;
    }
    if !pr.assignees.is_empty() {
        return Applicability::AlreadyAssigned;
    }
    Applicability::Eligible(pr)
}
