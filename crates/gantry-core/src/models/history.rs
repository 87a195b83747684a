//! Record of an applied intent.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Intent, PlanDiff};

/// An intent that was applied to the stored plan, with the diff it produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Monotonic entry id
    pub id: u64,

    /// The intent as applied
    pub intent: Intent,

    /// Changes the intent produced
    pub diff: PlanDiff,

    /// When the diff was committed (UTC)
    pub applied_at: Timestamp,
}
