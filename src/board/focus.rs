//! Focus-target selection rules.
//!
//! Selection is deterministic: ties break by list order.

use crate::model::{Column, Task};

/// Pick the focus target on focus-mode entry.
///
/// Prefers a todo task in the `today` column, then any todo task. Returns
/// `None` when no todo task exists (entry is rejected in that case).
pub fn initial_target(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .find(|t| t.is_todo() && t.column == Column::Today)
        .or_else(|| tasks.iter().find(|t| t.is_todo()))
}

/// Pick a replacement after the current target is completed or deleted.
///
/// Works on the post-mutation list, excluding the task just acted on.
/// Prefers a todo task in the departed target's column, then any remaining
/// todo task.
pub fn next_target<'a>(tasks: &'a [Task], column: Column, excluded_id: &str) -> Option<&'a Task> {
    tasks
        .iter()
        .find(|t| t.is_todo() && t.id != excluded_id && t.column == column)
        .or_else(|| tasks.iter().find(|t| t.is_todo() && t.id != excluded_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
