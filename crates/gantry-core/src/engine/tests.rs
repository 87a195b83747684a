//! Tests for the intent dispatcher.

use std::collections::HashSet;

use jiff::civil::{date, Date};

use super::*;
use crate::{
    ids::{RandomIdGenerator, SequentialIdGenerator},
    models::ShiftMode,
};

fn task(id: &str, name: &str, start: Date, end: Date) -> Task {
    Task::new(id, name, start, end)
}

fn create_test_plan() -> Plan {
    Plan::new(vec![
        task("design", "Design", date(2024, 3, 10), date(2024, 3, 20)),
        task("review", "Design Review", date(2024, 3, 21), date(2024, 3, 22))
            .with_depends_on(["design"]),
        task("ui", "UI Design", date(2024, 3, 11), date(2024, 3, 15)).with_assignee("Ana"),
        task("proc", "Procurement", date(2024, 4, 1), date(2024, 4, 10)),
        task("launch", "Launch", date(2024, 5, 1), date(2024, 5, 4)),
    ])
}

fn apply(plan: &Plan, intent: Intent) -> Result<PlanDiff> {
    apply_intent(plan, &intent, &mut SequentialIdGenerator::default())
}

fn single_update(diff: &PlanDiff) -> (&str, &Task, &Task) {
    assert_eq!(diff.len(), 1, "expected exactly one change: {diff:?}");
    diff.updates().next().expect("expected an update record")
}

#[test]
fn test_shift_backward_moves_both_dates() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::ShiftTaskDates {
            target: "Design".to_string(),
            delta_days: 5,
            mode: ShiftMode::Backward,
        },
    )
    .expect("shift should succeed");

    let (task_id, before, after) = single_update(&diff);
    assert_eq!(task_id, "design");
    assert_eq!(before, &plan.tasks[0]);
    assert_eq!(after.start, date(2024, 3, 5));
    assert_eq!(after.end, date(2024, 3, 15));
}

#[test]
fn test_shift_forward_across_month_end() {
    let plan = Plan::new(vec![task("t", "Truing", date(2024, 1, 30), date(2024, 1, 31))]);
    let diff = apply(
        &plan,
        Intent::ShiftTaskDates {
            target: "truing".to_string(),
            delta_days: 1,
            mode: ShiftMode::Forward,
        },
    )
    .unwrap();

    let (_, _, after) = single_update(&diff);
    assert_eq!(after.start, date(2024, 1, 31));
    assert_eq!(after.end, date(2024, 2, 1));
}

#[test]
fn test_shift_keeps_other_fields() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::ShiftTaskDates {
            target: "UI Design".to_string(),
            delta_days: 2,
            mode: ShiftMode::Forward,
        },
    )
    .unwrap();

    let (_, before, after) = single_update(&diff);
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.assignee.as_deref(), Some("Ana"));
    assert_eq!(after.depends_on, before.depends_on);
}

#[test]
fn test_extend_moves_only_end() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::ExtendTask {
            target: "procurement".to_string(),
            delta_days: 2,
        },
    )
    .unwrap();

    let (task_id, _, after) = single_update(&diff);
    assert_eq!(task_id, "proc");
    assert_eq!(after.start, date(2024, 4, 1));
    assert_eq!(after.end, date(2024, 4, 12));
}

#[test]
fn test_extend_with_large_negative_delta_inverts_task() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::ExtendTask {
            target: "Procurement".to_string(),
            delta_days: -20,
        },
    )
    .expect("negative durations are not rejected by the engine");

    let (_, _, after) = single_update(&diff);
    assert_eq!(after.end, date(2024, 3, 21));
    assert!(after.end < after.start);
    assert_eq!(crate::dates::duration_days(after), -11);
}

#[test]
fn test_create_appends_with_fresh_id() {
    let plan = create_test_plan();
    let diff = apply_intent(
        &plan,
        &Intent::CreateTask {
            name: "Procurement".to_string(),
            start: date(2024, 4, 1),
            end: date(2024, 4, 10),
            depends_on: None,
            assignee: None,
        },
        &mut RandomIdGenerator,
    )
    .unwrap();

    assert_eq!(diff.len(), 1);
    let created = diff.creates().next().expect("expected a create record");
    assert!(plan.tasks.iter().all(|t| t.id != created.id));

    let next = plan.apply_diff(&diff);
    assert_eq!(next.len(), plan.len() + 1);
    assert_eq!(next.tasks.last(), Some(created));
    assert_eq!(&next.tasks[..plan.len()], plan.tasks.as_slice());
}

#[test]
fn test_create_copies_fields_verbatim() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::CreateTask {
            name: "Final Polish".to_string(),
            start: date(2024, 5, 6),
            end: date(2024, 5, 2),
            depends_on: Some(vec!["does-not-exist".to_string()]),
            assignee: Some("Bo".to_string()),
        },
    )
    .unwrap();

    let created = diff.creates().next().unwrap();
    assert_eq!(created.id, "t_1");
    assert_eq!(created.name, "Final Polish");
    assert_eq!(created.start, date(2024, 5, 6));
    assert_eq!(created.end, date(2024, 5, 2));
    assert_eq!(created.depends_on, Some(vec!["does-not-exist".to_string()]));
    assert_eq!(created.assignee.as_deref(), Some("Bo"));
}

#[test]
fn test_create_avoids_existing_sequential_ids() {
    let plan = Plan::new(vec![
        task("t_1", "One", date(2024, 1, 1), date(2024, 1, 1)),
        task("t_2", "Two", date(2024, 1, 2), date(2024, 1, 2)),
    ]);
    let diff = apply(
        &plan,
        Intent::CreateTask {
            name: "Three".to_string(),
            start: date(2024, 1, 3),
            end: date(2024, 1, 3),
            depends_on: None,
            assignee: None,
        },
    )
    .unwrap();

    assert_eq!(diff.creates().next().unwrap().id, "t_3");
}

#[test]
fn test_create_fails_when_generator_keeps_colliding() {
    struct Stuck;
    impl IdGenerator for Stuck {
        fn next_id(&mut self, _existing_ids: &HashSet<&str>) -> String {
            "design".to_string()
        }
    }

    let plan = create_test_plan();
    let err = apply_intent(
        &plan,
        &Intent::CreateTask {
            name: "Dup".to_string(),
            start: date(2024, 1, 1),
            end: date(2024, 1, 1),
            depends_on: None,
            assignee: None,
        },
        &mut Stuck,
    )
    .unwrap_err();

    assert!(matches!(err, PlannerError::IdGenerationCollision { .. }));
}

#[test]
fn test_move_milestone_preserves_span() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::MoveMilestone {
            target: "Launch".to_string(),
            to_date: date(2024, 6, 1),
        },
    )
    .unwrap();

    let (task_id, _, after) = single_update(&diff);
    assert_eq!(task_id, "launch");
    assert_eq!(after.start, date(2024, 6, 1));
    assert_eq!(after.end, date(2024, 6, 4));
}

#[test]
fn test_move_milestone_earlier() {
    let plan = create_test_plan();
    let diff = apply(
        &plan,
        Intent::MoveMilestone {
            target: "launch".to_string(),
            to_date: date(2024, 2, 27),
        },
    )
    .unwrap();

    let (_, _, after) = single_update(&diff);
    assert_eq!(after.start, date(2024, 2, 27));
    assert_eq!(after.end, date(2024, 3, 1));
}

#[test]
fn test_move_milestone_clamps_inverted_span_to_zero() {
    let plan = Plan::new(vec![task("m", "Gate", date(2024, 5, 10), date(2024, 5, 8))]);
    let diff = apply(
        &plan,
        Intent::MoveMilestone {
            target: "Gate".to_string(),
            to_date: date(2024, 7, 1),
        },
    )
    .unwrap();

    let (_, _, after) = single_update(&diff);
    assert_eq!(after.start, date(2024, 7, 1));
    assert_eq!(after.end, date(2024, 7, 1));
}

#[test]
fn test_move_milestone_unknown_target_wording() {
    let plan = create_test_plan();
    let err = apply(
        &plan,
        Intent::MoveMilestone {
            target: "Ship".to_string(),
            to_date: date(2024, 7, 1),
        },
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Milestone not found: Ship");
}

#[test]
fn test_shift_phase_updates_every_match_in_plan_order() {
    let plan = Plan::new(vec![
        task("r", "Design Review", date(2024, 3, 1), date(2024, 3, 2)),
        task("u", "UI Design", date(2024, 3, 3), date(2024, 3, 4)),
        task("p", "Procurement", date(2024, 3, 5), date(2024, 3, 6)),
    ]);
    let diff = apply(
        &plan,
        Intent::ShiftPhase {
            target: "design".to_string(),
            delta_days: 3,
        },
    )
    .unwrap();

    let updated: Vec<_> = diff.updates().map(|(id, _, _)| id).collect();
    assert_eq!(updated, vec!["r", "u"]);
    for (_, before, after) in diff.updates() {
        assert_eq!(after.start, crate::dates::add_days(before.start, 3).unwrap());
        assert_eq!(after.end, crate::dates::add_days(before.end, 3).unwrap());
    }

    let next = plan.apply_diff(&diff);
    assert_eq!(next.tasks[2], plan.tasks[2]);
}

#[test]
fn test_shift_phase_over_matches_substrings() {
    let plan = Plan::new(vec![
        task("a", "UI Design", date(2024, 3, 3), date(2024, 3, 4)),
        task("b", "Redesign Logo", date(2024, 3, 5), date(2024, 3, 6)),
    ]);
    let diff = apply(
        &plan,
        Intent::ShiftPhase {
            target: "Design".to_string(),
            delta_days: -1,
        },
    )
    .unwrap();

    assert_eq!(diff.len(), 2);
}

#[test]
fn test_shift_phase_without_matches() {
    let plan = create_test_plan();
    let err = apply(
        &plan,
        Intent::ShiftPhase {
            target: "Packaging".to_string(),
            delta_days: 1,
        },
    )
    .unwrap_err();

    assert!(matches!(
        &err,
        PlannerError::TargetNotFound { kind: TargetKind::Phase, target } if target == "Packaging"
    ));
    assert_eq!(err.to_string(), "No tasks matched phase: Packaging");
}

#[test]
fn test_unresolvable_target_leaves_plan_untouched() {
    let plan = create_test_plan();
    let snapshot = plan.clone();

    let intents = [
        Intent::ShiftTaskDates {
            target: "Nonexistent".to_string(),
            delta_days: 1,
            mode: ShiftMode::Forward,
        },
        Intent::ExtendTask {
            target: "Nonexistent".to_string(),
            delta_days: 1,
        },
        Intent::MoveMilestone {
            target: "Nonexistent".to_string(),
            to_date: date(2024, 1, 1),
        },
    ];

    for intent in intents {
        let err = apply(&plan, intent).unwrap_err();
        match err {
            PlannerError::TargetNotFound { target, .. } => assert_eq!(target, "Nonexistent"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(plan, snapshot);
    }
}

#[test]
fn test_first_task_with_duplicate_name_wins() {
    let plan = Plan::new(vec![
        task("first", "QC", date(2024, 1, 1), date(2024, 1, 1)),
        task("second", "qc", date(2024, 1, 2), date(2024, 1, 2)),
    ]);
    let diff = apply(
        &plan,
        Intent::ExtendTask {
            target: "QC".to_string(),
            delta_days: 1,
        },
    )
    .unwrap();

    let (task_id, _, _) = single_update(&diff);
    assert_eq!(task_id, "first");
}

#[test]
fn test_shift_out_of_range_reports_error() {
    let plan = Plan::new(vec![task("x", "Far", date(9999, 12, 30), date(9999, 12, 31))]);
    let err = apply(
        &plan,
        Intent::ShiftTaskDates {
            target: "Far".to_string(),
            delta_days: 2,
            mode: ShiftMode::Forward,
        },
    )
    .unwrap_err();

    assert!(matches!(err, PlannerError::DateOutOfRange { .. }));
}

#[test]
fn test_projecting_create_diff_twice_duplicates_task() {
    let plan = create_test_plan();
    let diff = apply_intent(
        &plan,
        &Intent::CreateTask {
            name: "Procurement".to_string(),
            start: date(2024, 4, 1),
            end: date(2024, 4, 10),
            depends_on: None,
            assignee: None,
        },
        &mut RandomIdGenerator,
    )
    .unwrap();

    let once = plan.apply_diff(&diff);
    let twice = once.apply_diff(&diff);
    assert_eq!(twice.len(), plan.len() + 2);
    let created = diff.creates().next().unwrap();
    let copies = twice.tasks.iter().filter(|t| t.id == created.id).count();
    assert_eq!(copies, 2);
}

#[test]
fn test_projecting_create_diff_recomputed_yields_distinct_ids() {
    let plan = create_test_plan();
    let intent = Intent::CreateTask {
        name: "Procurement".to_string(),
        start: date(2024, 4, 1),
        end: date(2024, 4, 10),
        depends_on: None,
        assignee: None,
    };

    let first = apply_intent(&plan, &intent, &mut RandomIdGenerator).unwrap();
    let once = plan.apply_diff(&first);
    let second = apply_intent(&once, &intent, &mut RandomIdGenerator).unwrap();
    let twice = once.apply_diff(&second);

    let procurement: Vec<_> = twice
        .tasks
        .iter()
        .filter(|t| t.name == "Procurement")
        .collect();
    assert_eq!(procurement.len(), 3);
    assert_ne!(procurement[1].id, procurement[2].id);
}
