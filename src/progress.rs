//! Completion percentage over the task list.

use crate::entity::Task;

/// Percentage of tasks marked done, rounded to the nearest integer.
///
/// An empty list is 0%.
pub fn percent_done(tasks: &[Task]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.done).count();
    (100.0 * done as f64 / total as f64).round() as u8
}
