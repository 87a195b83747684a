//! Calendar date arithmetic for tasks.
//!
//! All functions operate on civil dates: no time of day, no time zone. Shifts
//! are exact day counts, so month ends, year ends and leap days fall out of
//! the calendar rather than any special casing here.

use jiff::{civil::Date, Span};

use crate::{
    error::{PlannerError, Result},
    models::Task,
};

/// Parses an ISO `YYYY-MM-DD` calendar date. Surrounding whitespace is rejected.
///
/// # Errors
///
/// Returns `PlannerError::DateParse` carrying the rejected input.
///
/// # Examples
///
/// ```rust
/// use gantry_core::dates::parse_date;
/// use jiff::civil::date;
///
/// assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
/// assert!(parse_date("2023-02-29").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<Date> {
    value.parse::<Date>().map_err(|source| PlannerError::DateParse {
        value: value.to_string(),
        source,
    })
}

/// Returns `date` moved by `days` calendar days (negative moves backward).
///
/// # Errors
///
/// Returns `PlannerError::DateOutOfRange` when the result does not fit in the
/// supported calendar. The date is never clamped.
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    let out_of_range = || PlannerError::DateOutOfRange { date, days };
    let span = Span::new().try_days(days).map_err(|_| out_of_range())?;
    date.checked_add(span).map_err(|_| out_of_range())
}

/// Returns a copy of `task` with both `start` and `end` moved by `delta_days`.
pub fn shift_dates(task: &Task, delta_days: i64) -> Result<Task> {
    Ok(Task {
        start: add_days(task.start, delta_days)?,
        end: add_days(task.end, delta_days)?,
        ..task.clone()
    })
}

/// Whole days from `start` to `end`; negative for an inverted task.
pub fn duration_days(task: &Task) -> i64 {
    i64::from((task.end - task.start).get_days())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn task(start: Date, end: Date) -> Task {
        Task::new("t", "Task", start, end)
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("next tuesday").unwrap_err();
        match err {
            PlannerError::DateParse { value, .. } => assert_eq!(value, "next tuesday"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_date_rejects_surrounding_whitespace() {
        assert!(matches!(
            parse_date(" 2025-08-18 "),
            Err(PlannerError::DateParse { .. })
        ));
        assert_eq!(parse_date("2025-08-18").unwrap(), date(2025, 8, 18));
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(add_days(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 1));
        assert_eq!(add_days(date(2024, 12, 31), 1).unwrap(), date(2025, 1, 1));
        assert_eq!(add_days(date(2025, 1, 1), -1).unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn test_add_days_handles_leap_years() {
        assert_eq!(add_days(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(date(2023, 2, 28), 1).unwrap(), date(2023, 3, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(date(2024, 1, 1), 366).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_add_days_out_of_range_is_an_error() {
        let err = add_days(date(9999, 12, 31), 1).unwrap_err();
        assert!(matches!(err, PlannerError::DateOutOfRange { days: 1, .. }));

        let err = add_days(date(2024, 1, 1), i64::MAX).unwrap_err();
        assert!(matches!(err, PlannerError::DateOutOfRange { .. }));
    }

    #[test]
    fn test_shift_dates_moves_both_ends_exactly() {
        let starts = [
            date(2024, 1, 31),
            date(2024, 2, 28),
            date(2023, 12, 30),
            date(2025, 8, 18),
        ];
        for start in starts {
            let original = task(start, add_days(start, 4).unwrap());
            for delta in [-400, -31, -1, 1, 2, 29, 365] {
                let shifted = shift_dates(&original, delta).unwrap();
                assert_eq!(shifted.start, add_days(original.start, delta).unwrap());
                assert_eq!(shifted.end, add_days(original.end, delta).unwrap());
                assert_eq!(shifted.id, original.id);
                assert_eq!(shifted.name, original.name);
            }
        }
    }

    #[test]
    fn test_shift_dates_identity_and_round_trip() {
        let original = task(date(2024, 2, 27), date(2024, 3, 2))
            .with_depends_on(["a", "b"])
            .with_assignee("Ana");
        assert_eq!(shift_dates(&original, 0).unwrap(), original);

        for delta in [-90, -3, 1, 7, 400] {
            let there = shift_dates(&original, delta).unwrap();
            let back = shift_dates(&there, -delta).unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn test_duration_is_invariant_under_shift() {
        let original = task(date(2024, 2, 20), date(2024, 3, 5));
        let span = duration_days(&original);
        assert_eq!(span, 14);
        for delta in [-60, -1, 1, 10, 366] {
            assert_eq!(duration_days(&shift_dates(&original, delta).unwrap()), span);
        }
    }

    #[test]
    fn test_duration_of_single_day_and_inverted_tasks() {
        assert_eq!(duration_days(&task(date(2025, 8, 18), date(2025, 8, 18))), 0);
        assert_eq!(duration_days(&task(date(2025, 8, 20), date(2025, 8, 18))), -2);
    }
}
