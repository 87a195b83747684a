//! Task id generation.
//!
//! The engine never invents ids on its own; it asks an [`IdGenerator`] and
//! checks the answer against the ids already in the plan. Tests inject a
//! [`SequentialIdGenerator`] to get stable ids.

use std::{collections::HashSet, fmt, str::FromStr};

use log::warn;
use uuid::Uuid;

use crate::error::{PlannerError, Result};

/// Source of fresh task ids.
pub trait IdGenerator {
    /// Returns an id that should not be in `existing_ids`.
    fn next_id(&mut self, existing_ids: &HashSet<&str>) -> String;
}

/// Random ids of the form `t_<12 hex digits>` drawn from UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self, _existing_ids: &HashSet<&str>) -> String {
        let simple = Uuid::new_v4().simple().to_string();
        format!("t_{}", &simple[..12])
    }
}

/// Counter-based ids of the form `t_<n>`, skipping any already taken.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Starts counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, existing_ids: &HashSet<&str>) -> String {
        loop {
            let candidate = format!("t_{}", self.next);
            self.next += 1;
            if !existing_ids.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }
}

/// Which generator the planner should build for each application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// [`RandomIdGenerator`]
    #[default]
    Random,
    /// [`SequentialIdGenerator`] counting from one
    Sequential,
}

impl IdStrategy {
    /// Builds a fresh generator.
    pub fn generator(self) -> Box<dyn IdGenerator + Send> {
        match self {
            IdStrategy::Random => Box::new(RandomIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Random => "random",
            IdStrategy::Sequential => "sequential",
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(format!("Invalid id strategy: {s}")),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Asks `ids` for an id not in `existing_ids`.
///
/// A colliding id is regenerated once. A second collision means the generator
/// is broken and is reported as `PlannerError::IdGenerationCollision`.
pub fn allocate_id(ids: &mut dyn IdGenerator, existing_ids: &HashSet<&str>) -> Result<String> {
    let first = ids.next_id(existing_ids);
    if !existing_ids.contains(first.as_str()) {
        return Ok(first);
    }

    warn!("Generated task id '{first}' already exists, regenerating");
    let second = ids.next_id(existing_ids);
    if existing_ids.contains(second.as_str()) {
        return Err(PlannerError::IdGenerationCollision { id: second });
    }
    Ok(second)
}
