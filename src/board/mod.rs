//! Board controller: the stateful orchestrator between the store and the
//! presentation layer.
//!
//! The controller owns the client-side task list and the operational rules:
//! lifecycle transitions, search filtering, focus-mode target selection, and
//! move semantics. Mutations are confirmed-then-applied: local state changes
//! only after the store acknowledges, never optimistically. Store failures
//! are caught here, surfaced as a failure notice, and leave state untouched.

pub mod focus;

use chrono::Utc;
use tracing::debug;

use crate::model::{Column, Status, Task, TaskDraft, TaskPatch};
use crate::notify::{Notice, Notifier};
use crate::store::{StoreError, TaskService};

/// Error type for operations the controller rejects locally
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// How a task should be rendered while focus mode is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPresentation {
    /// The active focus target
    Focused,
    /// A pending task other than the target (focus mode only)
    Dimmed,
    Normal,
}

/// The board controller.
///
/// Generic over the persistence seam so tests (and a future real backend)
/// can substitute the mock store.
pub struct BoardController<S: TaskService> {
    store: S,
    notifier: Box<dyn Notifier>,
    tasks: Vec<Task>,
    search_query: String,
    focus_mode: bool,
    focus_task_id: Option<String>,
    draft: TaskDraft,
    loading: bool,
    load_error: Option<String>,
}

impl<S: TaskService> BoardController<S> {
    pub fn new(store: S, notifier: Box<dyn Notifier>) -> Self {
        BoardController {
            store,
            notifier,
            tasks: Vec::new(),
            search_query: String::new(),
            focus_mode: false,
            focus_task_id: None,
            draft: TaskDraft::default(),
            loading: false,
            load_error: None,
        }
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Fetch all tasks from the store, replacing the local list.
    ///
    /// On failure the store's message is kept verbatim in `load_error`; the
    /// error view offers a manual retry by calling `load` again.
    pub async fn load(&mut self) {
        self.loading = true;
        self.load_error = None;
        match self.store.list_all().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
            }
            Err(err) => {
                self.load_error = Some(err.to_string());
                self.notifier
                    .notify(Notice::Failure("failed to load tasks".to_string()));
            }
        }
        self.loading = false;
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Submit the current draft as a new task.
    ///
    /// A blank (whitespace-only) title is rejected before any store call.
    /// On success the draft resets to its defaults.
    pub async fn create_task(&mut self) -> Result<(), BoardError> {
        if self.draft.title.trim().is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        match self.store.create(self.draft.clone()).await {
            Ok(created) => {
                self.tasks.push(created);
                self.draft = TaskDraft::default();
                self.notifier.notify(Notice::TaskCreated);
            }
            Err(err) => self.store_failure("failed to create task", err),
        }
        Ok(())
    }

    /// Flip a task between todo and done, stamping or clearing
    /// `completed_at` to match.
    pub async fn toggle_complete(&mut self, id: &str) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        let patch = match task.status {
            Status::Todo => TaskPatch::completion(Status::Done, Some(Utc::now())),
            Status::Done => TaskPatch::completion(Status::Todo, None),
        };

        match self.store.update(id, patch).await {
            Ok(updated) => {
                let became_done = updated.is_done();
                let column = updated.column;
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
                if became_done {
                    self.notifier.notify(Notice::TaskCompleted);
                    if self.focus_task_id.as_deref() == Some(id) {
                        self.reselect_focus(id, column);
                    }
                } else {
                    self.notifier.notify(Notice::TaskReopened);
                }
            }
            Err(err) => self.store_failure("failed to update task", err),
        }
    }

    /// Delete a task. Local state changes only after the store confirms.
    pub async fn delete_task(&mut self, id: &str) {
        match self.store.delete(id).await {
            Ok(deleted) => {
                self.tasks.retain(|t| t.id != id);
                self.notifier.notify(Notice::TaskDeleted);
                if self.focus_task_id.as_deref() == Some(id) {
                    self.reselect_focus(id, deleted.column);
                }
            }
            Err(err) => self.store_failure("failed to delete task", err),
        }
    }

    /// Move a task to another column. Invoked by explicit move actions and
    /// by the presentation layer once a drop gesture completes. A move to
    /// the task's current column is a no-op: no store call, no notice.
    pub async fn move_task(&mut self, id: &str, target: Column) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        if task.column == target {
            return;
        }
        match self.store.update(id, TaskPatch::column(target)).await {
            Ok(updated) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
                self.notifier.notify(Notice::TaskMoved(target));
            }
            Err(err) => self.store_failure("failed to move task", err),
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Tasks matching the current search query, in list order.
    /// Applied before column partitioning.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.matches_query(&self.search_query))
            .collect()
    }

    /// Filtered tasks belonging to one column
    pub fn tasks_in_column(&self, column: Column) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.matches_query(&self.search_query) && t.column == column)
            .collect()
    }

    /// Pending-task count shown in a column header
    pub fn todo_count(&self, column: Column) -> usize {
        self.tasks_in_column(column)
            .iter()
            .filter(|t| t.is_todo())
            .count()
    }

    // -----------------------------------------------------------------------
    // Focus mode
    // -----------------------------------------------------------------------

    /// Toggle focus mode.
    ///
    /// Entry is rejected (mode stays off, no notice) when no todo task
    /// exists. On entry the target is a todo task in `today`, else the first
    /// todo task in list order. Toggling off clears both flag and target.
    pub fn toggle_focus_mode(&mut self) {
        if self.focus_mode {
            self.focus_mode = false;
            self.focus_task_id = None;
            self.notifier.notify(Notice::FocusOff);
            return;
        }
        if let Some(target) = focus::initial_target(&self.tasks) {
            self.focus_task_id = Some(target.id.clone());
            self.focus_mode = true;
            self.notifier.notify(Notice::FocusOn);
        }
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn focus_task_id(&self) -> Option<&str> {
        self.focus_task_id.as_deref()
    }

    /// How a task should render given the current focus state.
    /// Done tasks never dim.
    pub fn presentation(&self, task: &Task) -> TaskPresentation {
        if !self.focus_mode {
            return TaskPresentation::Normal;
        }
        if self.focus_task_id.as_deref() == Some(task.id.as_str()) {
            TaskPresentation::Focused
        } else if task.is_todo() {
            TaskPresentation::Dimmed
        } else {
            TaskPresentation::Normal
        }
    }

    /// Reselect after the current target left the todo pool.
    ///
    /// Uses the post-mutation list. When no todo task remains, focus mode
    /// drops back to off together with the target (symmetric with the entry
    /// precondition).
    fn reselect_focus(&mut self, departed_id: &str, departed_column: Column) {
        self.focus_task_id =
            focus::next_target(&self.tasks, departed_column, departed_id).map(|t| t.id.clone());
        if self.focus_task_id.is_none() {
            self.focus_mode = false;
        }
    }

    // -----------------------------------------------------------------------
    // Observable state
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The in-progress new-task form state
    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    fn store_failure(&mut self, context: &str, err: StoreError) {
        debug!(error = %err, "{}", context);
        self.notifier.notify(Notice::Failure(context.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
