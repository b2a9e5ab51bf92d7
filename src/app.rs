use anyhow::Result;
use rand::Rng;

use crate::domain::assignee::{parse_count, require_pool};
use crate::error::AssignError;
use crate::repo::Assigner;
use crate::repo::github::event::EventPayload;
use crate::usecase::gate::{self, Applicability, PrTarget};
use crate::usecase::select::select_assignees;

/// Raw action inputs, parsed only once a pull request turns out to be eligible.
#[derive(Debug, Clone)]
pub struct AssignConfig {
    pub number_of_assignees: String,
    pub assignee_pool: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Draft,
    AlreadyAssigned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Assigned {
        target: PrTarget,
        assignees: Vec<String>,
    },
}

pub struct App<A: Assigner, R: Rng> {
    assigner: A,
    rng: R,
    config: AssignConfig,
}

impl<A: Assigner, R: Rng> App<A, R> {
    pub fn new(assigner: A, rng: R, config: AssignConfig) -> Self {
        Self {
            assigner,
            rng,
            config,
        }
    }

    pub fn assigner(&self) -> &A {
        &self.assigner
    }

    pub fn run(&mut self, event: &EventPayload) -> Result<Outcome> {
        let pr = match gate::evaluate(event) {
            Applicability::NotApplicable => {
                return Err(AssignError::config(
                    "No pull request found. The auto-assign action only works for pull requests",
                )
                .into());
            }
            Applicability::Draft => {
                tracing::info!("Pull request is still a draft. Skipping.");
                return Ok(Outcome::Skipped(SkipReason::Draft));
            }
            Applicability::AlreadyAssigned => {
                tracing::info!("Pull request has existing assignees. Skipping.");
                return Ok(Outcome::Skipped(SkipReason::AlreadyAssigned));
            }
            Applicability::Eligible(pr) => pr,
        };

        let target = PrTarget::new(event, pr)?;
        let count = parse_count(&self.config.number_of_assignees)?;
        let pool = require_pool(&self.config.assignee_pool)?;
        tracing::debug!(%target, author = %target.author, pool_size = pool.len(), count, "selecting assignees");

        let assignees = select_assignees(&pool, &target.author, count, &mut self.rng)?;
        self.assigner.add_assignees(&target, &assignees)?;

        tracing::info!("New pull request assignees: {}.", assignees.join(", "));
        Ok(Outcome::Assigned { target, assignees })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use anyhow::anyhow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::PoolShortfall;
    use crate::repo::memory::RecordingAssigner;

    fn event(author: &str, draft: bool, assignees: &[&str]) -> EventPayload {
        let assignees: Vec<_> = assignees
            .iter()
            .map(|l| serde_json::json!({ "login": l }))
            .collect();
        serde_json::from_value(serde_json::json!({
            "action": "opened",
            "pull_request": {
                "number": 12,
                "draft": draft,
                "user": { "login": author },
                "assignees": assignees,
            },
            "repository": { "name": "widgets", "owner": { "login": "acme" } },
        }))
        .unwrap()
    }

    fn app(count: &str, pool: &str, seed: u64) -> App<RecordingAssigner, StdRng> {
        App::new(
            RecordingAssigner::default(),
            StdRng::seed_from_u64(seed),
            AssignConfig {
                number_of_assignees: count.to_string(),
                assignee_pool: pool.to_string(),
            },
        )
    }

    fn shortfall(err: &anyhow::Error) -> Option<PoolShortfall> {
        match err.downcast_ref::<AssignError>()? {
            AssignError::InsufficientPool(s) => Some(*s),
            AssignError::Configuration(_) => None,
        }
    }

    #[test]
    fn assigns_two_of_the_non_authors() {
        let mut app = app("2", "a\nb\nc\nd\n", 5);
        let outcome = app.run(&event("a", false, &[])).unwrap();

        let Outcome::Assigned { target, assignees } = outcome else {
            panic!("expected assignment");
        };
        assert_eq!(target.to_string(), "acme/widgets#12");
        assert_eq!(assignees.len(), 2);
        assert!(assignees.iter().all(|l| ["b", "c", "d"].contains(&l.as_str())));
        assert_eq!(app.assigner().calls(), &[(target, assignees)]);
    }

    #[test]
    fn every_non_author_is_picked_about_equally() {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut app = App::new(
            RecordingAssigner::default(),
            rand::thread_rng(),
            AssignConfig {
                number_of_assignees: "2".into(),
                assignee_pool: "a\nb\nc\nd".into(),
            },
        );
        let ev = event("a", false, &[]);
        for _ in 0..1000 {
            let Outcome::Assigned { assignees, .. } = app.run(&ev).unwrap() else {
                panic!("expected assignment");
            };
            let unique: HashSet<_> = assignees.iter().collect();
            assert_eq!(unique.len(), 2);
            for login in assignees {
                *counts.entry(login).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 3);
        for n in counts.values() {
            assert!((550..=780).contains(n), "{counts:?}");
        }
    }

    #[test]
    fn author_exclusion_shortfall_is_reported() {
        let err = app("2", "a\nb", 1).run(&event("a", false, &[])).unwrap_err();
        assert_eq!(shortfall(&err), Some(PoolShortfall::AfterAuthorRemoval));
        assert!(err.to_string().contains("after removing the author"));

        let err = app("1", "a", 1).run(&event("a", false, &[])).unwrap_err();
        assert_eq!(shortfall(&err), Some(PoolShortfall::AfterAuthorRemoval));
    }

    #[test]
    fn small_pool_shortfall_is_reported() {
        let err = app("3", "a\nb", 1).run(&event("x", false, &[])).unwrap_err();
        assert_eq!(shortfall(&err), Some(PoolShortfall::BeforeAuthorRemoval));
    }

    #[test]
    fn failed_selection_makes_no_assignment_call() {
        let mut app = app("3", "a\nb", 1);
        assert!(app.run(&event("a", false, &[])).is_err());
        assert!(app.assigner().calls().is_empty());
    }

    #[test]
    fn draft_is_skipped_without_selecting() {
        // A malformed count would fail if selection ran.
        let mut app = app("not a number", "", 1);
        let outcome = app.run(&event("a", true, &[])).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::Draft));
        assert!(app.assigner().calls().is_empty());
    }

    #[test]
    fn already_assigned_is_skipped_without_selecting() {
        let mut app = app("not a number", "", 1);
        let outcome = app.run(&event("a", false, &["b"])).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::AlreadyAssigned));
        assert!(app.assigner().calls().is_empty());
    }

    #[test]
    fn non_pull_request_event_is_a_configuration_error() {
        let push = EventPayload::from_json(r#"{"ref": "refs/heads/main"}"#).unwrap();
        let err = app("1", "a\nb", 1).run(&push).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssignError>(),
            Some(AssignError::Configuration(_))
        ));
        assert!(err.to_string().contains("No pull request found"));
    }

    #[test]
    fn malformed_count_is_a_configuration_error() {
        let err = app("-2", "a\nb", 1).run(&event("a", false, &[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssignError>(),
            Some(AssignError::Configuration(_))
        ));
    }

    #[test]
    fn zero_count_assigns_nobody() {
        let mut app = app("0", "a", 1);
        let Outcome::Assigned { assignees, .. } = app.run(&event("a", false, &[])).unwrap() else {
            panic!("expected assignment");
        };
        assert!(assignees.is_empty());
    }

    struct FailingAssigner;

    impl Assigner for FailingAssigner {
        fn add_assignees(&mut self, _: &PrTarget, _: &[String]) -> Result<()> {
            Err(anyhow!("Bad credentials"))
        }
    }

    #[test]
    fn assignment_errors_propagate_as_is() {
        let mut app = App::new(
            FailingAssigner,
            StdRng::seed_from_u64(1),
            AssignConfig {
                number_of_assignees: "1".into(),
                assignee_pool: "a\nb".into(),
            },
        );
        let err = app.run(&event("a", false, &[])).unwrap_err();
        assert_eq!(err.to_string(), "Bad credentials");
        assert!(err.downcast_ref::<AssignError>().is_none());
    }
}
