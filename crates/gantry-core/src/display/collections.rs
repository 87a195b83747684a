//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::HistoryEntry;

/// Newtype wrapper for displaying the known task names, one per line.
///
/// # Examples
///
/// ```rust
/// use gantry_core::display::TaskNames;
///
/// let names = TaskNames(vec!["W1 Cutting".to_string(), "W1 Spoking".to_string()]);
/// assert_eq!(names.to_string(), "- W1 Cutting\n- W1 Spoking\n");
/// ```
pub struct TaskNames(pub Vec<String>);

impl TaskNames {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TaskNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for name in &self.0 {
            writeln!(f, "- {name}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying applied intents, most recent first.
pub struct History(pub Vec<HistoryEntry>);

impl History {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No intents applied yet.");
        }
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
