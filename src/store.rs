//! Mock task-persistence service.
//!
//! `MemoryStore` emulates a remote task service: an encapsulated in-memory
//! collection behind async operations with simulated network latency. The
//! `TaskService` trait is the seam a real backend would implement instead.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Status, Task, TaskDraft, TaskPatch};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("task service unavailable: {0}")]
    Unavailable(String),
}

/// The persistence contract the board controller depends on.
///
/// Every operation returns a value copy; mutating a previously returned copy
/// is never visible to other callers. Ordering between overlapping calls is
/// not guaranteed.
#[async_trait]
pub trait TaskService {
    /// Snapshot copy of all tasks
    async fn list_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Fetch a single task by id
    async fn get(&self, id: &str) -> Result<Task, StoreError>;

    /// Create a task from a draft. The store assigns a fresh unique id,
    /// sets `created_at` to the current time, `status` to todo, and
    /// `completed_at` to `None`.
    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Apply a partial patch over an existing task
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError>;

    /// Remove a task, returning the removed copy
    async fn delete(&self, id: &str) -> Result<Task, StoreError>;
}

/// Simulated per-operation latency.
///
/// Defaults mirror the service this mock stands in for; tests use
/// [`Latency::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub const ZERO: Latency = Latency {
        list: Duration::ZERO,
        get: Duration::ZERO,
        create: Duration::ZERO,
        update: Duration::ZERO,
        delete: Duration::ZERO,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Latency {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(300),
        }
    }
}

/// Bundled seed list the board loads at process start
pub const SEED_JSON: &str = include_str!("seed.json");

/// In-memory mock store.
///
/// Constructed once per process (or per test); the backing collection is
/// owned by the instance, never shared implicitly.
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
    latency: Latency,
}

impl MemoryStore {
    /// Empty store with default latency
    pub fn new() -> Self {
        MemoryStore::seeded(Vec::new(), Latency::default())
    }

    /// Store pre-populated with the given tasks
    pub fn seeded(tasks: Vec<Task>, latency: Latency) -> Self {
        MemoryStore {
            tasks: Mutex::new(tasks),
            latency,
        }
    }

    /// Store seeded from a JSON task list (see [`SEED_JSON`])
    pub fn from_seed_json(json: &str, latency: Latency) -> Result<Self, serde_json::Error> {
        let tasks: Vec<Task> = serde_json::from_str(json)?;
        Ok(MemoryStore::seeded(tasks, latency))
    }

    /// Store seeded from the bundled seed list
    pub fn bundled(latency: Latency) -> Result<Self, serde_json::Error> {
        MemoryStore::from_seed_json(SEED_JSON, latency)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

#[async_trait]
impl TaskService for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        sleep(self.latency.list).await;
        let tasks = self.tasks.lock().await;
        debug!(count = tasks.len(), "list all tasks");
        Ok(tasks.clone())
    }

    async fn get(&self, id: &str) -> Result<Task, StoreError> {
        sleep(self.latency.get).await;
        let tasks = self.tasks.lock().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        sleep(self.latency.create).await;
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            column: draft.column,
            status: Status::Todo,
            created_at: Utc::now(),
            completed_at: None,
        };
        let mut tasks = self.tasks.lock().await;
        tasks.push(task.clone());
        debug!(id = %task.id, "task created");
        Ok(task)
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError> {
        sleep(self.latency.update).await;
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply(task);
        debug!(id = %task.id, "task updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> Result<Task, StoreError> {
        sleep(self.latency.delete).await;
        let mut tasks = self.tasks.lock().await;
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = tasks.remove(idx);
        debug!(id = %removed.id, "task deleted");
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Priority};
    use pretty_assertions::assert_eq;

    fn store() -> MemoryStore {
        MemoryStore::seeded(Vec::new(), Latency::ZERO)
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "".to_string(),
            priority: Priority::Medium,
            column: Column::Today,
        }
    }

    // --- Create / list round trip ---

    #[tokio::test]
    async fn test_create_then_list_includes_task() {
        let store = store();
        let created = store
            .create(TaskDraft {
                title: "Write spec".to_string(),
                description: "first pass".to_string(),
                priority: Priority::High,
                column: Column::Tomorrow,
            })
            .await
            .unwrap();

        assert_eq!(created.status, Status::Todo);
        assert_eq!(created.completed_at, None);
        assert!(!created.id.is_empty());

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Write spec");
        assert_eq!(all[0].description, "first pass");
        assert_eq!(all[0].priority, Priority::High);
        assert_eq!(all[0].column, Column::Tomorrow);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = store();
        let a = store.create(draft("a")).await.unwrap();
        let b = store.create(draft("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    // --- Value-copy semantics ---

    #[tokio::test]
    async fn test_returned_copies_are_independent() {
        let store = store();
        let mut created = store.create(draft("original")).await.unwrap();
        created.title = "mutated locally".to_string();

        let all = store.list_all().await.unwrap();
        assert_eq!(all[0].title, "original");
    }

    // --- Update ---

    #[tokio::test]
    async fn test_update_applies_patch() {
        let store = store();
        let created = store.create(draft("toggle me")).await.unwrap();
        let now = Utc::now();

        let updated = store
            .update(&created.id, TaskPatch::completion(Status::Done, Some(now)))
            .await
            .unwrap();
        assert_eq!(updated.status, Status::Done);
        assert_eq!(updated.completed_at, Some(now));

        // Untouched fields survive
        assert_eq!(updated.title, "toggle me");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_not_found() {
        let store = store();
        let err = store
            .update("missing", TaskPatch::column(Column::Someday))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }

    // --- Delete ---

    #[tokio::test]
    async fn test_delete_returns_removed_copy() {
        let store = store();
        let created = store.create(draft("doomed")).await.unwrap();
        let removed = store.delete(&created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let store = store();
        store.create(draft("survivor")).await.unwrap();

        let err = store.delete("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    // --- Get ---

    #[tokio::test]
    async fn test_get_by_id() {
        let store = store();
        let created = store.create(draft("lookup")).await.unwrap();
        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let err = store.get("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    // --- Latency ---

    #[tokio::test(start_paused = true)]
    async fn test_operations_observe_configured_latency() {
        let store = MemoryStore::seeded(Vec::new(), Latency::default());
        let start = tokio::time::Instant::now();
        store.create(draft("slow")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(400));

        let start = tokio::time::Instant::now();
        store.list_all().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    // --- Seed data ---

    #[tokio::test]
    async fn test_bundled_seed_parses_and_lists() {
        let store = MemoryStore::bundled(Latency::ZERO).unwrap();
        let all = store.list_all().await.unwrap();
        assert!(!all.is_empty());
        // Seed ids are unique
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        // Completion invariant holds for every seeded record
        for task in &all {
            assert_eq!(task.completed_at.is_some(), task.is_done());
        }
    }
}
