use anyhow::Result;

use super::Assigner;
use crate::usecase::gate::PrTarget;

/// Keeps every assignment in memory instead of calling GitHub.
#[derive(Debug, Default)]
pub struct RecordingAssigner {
    calls: Vec<(PrTarget, Vec<String>)>,
}

impl RecordingAssigner {
    pub fn calls(&self) -> &[(PrTarget, Vec<String>)] {
        &self.calls
    }
}

impl Assigner for RecordingAssigner {
    fn add_assignees(&mut self, target: &PrTarget, assignees: &[String]) -> Result<()> {
        tracing::debug!(%target, ?assignees, "recording assignment without calling GitHub");
        self.calls.push((target.clone(), assignees.to_vec()));
        Ok(())
    }
}
