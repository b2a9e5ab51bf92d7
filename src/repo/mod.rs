use anyhow::Result;

use crate::usecase::gate::PrTarget;

pub mod github;
pub mod memory;

/// Where a finished selection is sent.
pub trait Assigner {
    fn add_assignees(&mut self, target: &PrTarget, assignees: &[String]) -> Result<()>;
}
