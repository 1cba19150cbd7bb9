use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Done,
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// One of the three fixed lanes a task is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    #[default]
    Today,
    Tomorrow,
    Someday,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 3] = [Column::Today, Column::Tomorrow, Column::Someday];

    pub fn label(self) -> &'static str {
        match self {
            Column::Today => "today",
            Column::Tomorrow => "tomorrow",
            Column::Someday => "someday",
        }
    }
}

/// A task on the board.
///
/// `id` is assigned by the store at creation and never changes afterwards.
/// `completed_at` is `Some` exactly when `status` is `Done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub column: Column,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_todo(&self) -> bool {
        self.status == Status::Todo
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Case-insensitive substring match over title and description.
    /// An empty query matches every task.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// New-task form state submitted to the store's create operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub column: Column,
}

/// A partial field update applied over an existing task by the store.
///
/// `completed_at` is doubly optional: `None` leaves the field alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub column: Option<Column>,
    pub status: Option<Status>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch that moves a task to a different column
    pub fn column(column: Column) -> Self {
        TaskPatch {
            column: Some(column),
            ..TaskPatch::default()
        }
    }

    /// Patch that sets completion state and its timestamp together
    pub fn completion(status: Status, completed_at: Option<DateTime<Utc>>) -> Self {
        TaskPatch {
            status: Some(status),
            completed_at: Some(completed_at),
            ..TaskPatch::default()
        }
    }

    /// Apply this patch in place. Untouched fields keep their values.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(column) = self.column {
            task.column = column;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
