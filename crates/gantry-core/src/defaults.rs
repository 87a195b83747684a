//! The built-in starter plan.

use jiff::civil::date;

use crate::models::{Plan, Task};

/// A two-wheel build for a scooter: each wheel is cut, spoked, trued and
/// checked, then the pair is assembled, packed and shipped.
///
/// Used when a fresh store is seeded and when the plan is reset.
pub fn default_plan() -> Plan {
    Plan::new(vec![
        Task::new("w1_cut", "W1 Cutting", date(2025, 8, 18), date(2025, 8, 18)),
        Task::new("w1_spoke", "W1 Spoking", date(2025, 8, 19), date(2025, 8, 20))
            .with_depends_on(["w1_cut"]),
        Task::new("w1_true", "W1 Truing", date(2025, 8, 21), date(2025, 8, 21))
            .with_depends_on(["w1_spoke"]),
        Task::new("w1_qc", "W1 QC", date(2025, 8, 22), date(2025, 8, 22))
            .with_depends_on(["w1_true"]),
        Task::new("w2_cut", "W2 Cutting", date(2025, 8, 18), date(2025, 8, 18)),
        Task::new("w2_spoke", "W2 Spoking", date(2025, 8, 19), date(2025, 8, 20))
            .with_depends_on(["w2_cut"]),
        Task::new("w2_true", "W2 Truing", date(2025, 8, 21), date(2025, 8, 21))
            .with_depends_on(["w2_spoke"]),
        Task::new("w2_qc", "W2 QC", date(2025, 8, 22), date(2025, 8, 22))
            .with_depends_on(["w2_true"]),
        Task::new(
            "assy_pair",
            "Wheel Pair Assembly",
            date(2025, 8, 25),
            date(2025, 8, 25),
        )
        .with_depends_on(["w1_qc", "w2_qc"]),
        Task::new("pack", "Packaging", date(2025, 8, 26), date(2025, 8, 26))
            .with_depends_on(["assy_pair"]),
        Task::new(
            "ship",
            "Ship to Customer",
            date(2025, 8, 27),
            date(2025, 8, 27),
        )
        .with_depends_on(["pack"]),
    ])
}
