//! Task lookup by name.
//!
//! Names are not unique in a plan. Exact lookups return the first match in
//! plan order and make no attempt to disambiguate; phase lookups are plain
//! substring matches and will happily match "Redesign Logo" for "design".

use crate::models::Task;

/// Finds the first task whose name equals `name`, ignoring case and
/// surrounding whitespace in `name`.
///
/// # Examples
///
/// ```rust
/// use gantry_core::{models::Task, resolver::find_by_name};
/// use jiff::civil::date;
///
/// let tasks = vec![Task::new("a", "UI Design", date(2024, 3, 1), date(2024, 3, 5))];
/// assert_eq!(find_by_name(&tasks, " ui design").map(|t| t.id.as_str()), Some("a"));
/// assert!(find_by_name(&tasks, "design").is_none());
/// ```
pub fn find_by_name<'a>(tasks: &'a [Task], name: &str) -> Option<&'a Task> {
    let wanted = name.trim().to_lowercase();
    tasks.iter().find(|t| t.name.to_lowercase() == wanted)
}

/// Finds every task whose name contains `term`, ignoring case and surrounding
/// whitespace in `term`. Matches come back in plan order.
pub fn find_by_phase<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let token = term.trim().to_lowercase();
    tasks
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&token))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn create_tasks() -> Vec<Task> {
        let d = date(2024, 3, 1);
        vec![
            Task::new("1", "Design Review", d, d),
            Task::new("2", "UI Design", d, d),
            Task::new("3", "Procurement", d, d),
            Task::new("4", "design review", d, d),
            Task::new("5", "Redesign Logo", d, d),
        ]
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let tasks = create_tasks();
        let found = find_by_name(&tasks, "PROCUREMENT").expect("should match");
        assert_eq!(found.id, "3");
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let tasks = create_tasks();
        let found = find_by_name(&tasks, "Design review").expect("should match");
        assert_eq!(found.id, "1");
    }

    #[test]
    fn test_find_by_name_requires_whole_name() {
        let tasks = create_tasks();
        assert!(find_by_name(&tasks, "Procure").is_none());
        assert!(find_by_name(&tasks, "Nonexistent").is_none());
    }

    #[test]
    fn test_find_by_phase_keeps_plan_order() {
        let tasks = create_tasks();
        let ids: Vec<_> = find_by_phase(&tasks, " Design ")
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_find_by_phase_empty_when_nothing_matches() {
        let tasks = create_tasks();
        assert!(find_by_phase(&tasks, "packaging").is_empty());
        assert!(find_by_phase(&[], "design").is_empty());
    }
}
