//! slate - Task-Board State Engine
//!
//! The state engine behind a three-column (kanban-style) task board. It owns
//! the rules the presentation layer renders: task lifecycle, search
//! filtering, focus-mode target selection, keyboard-shortcut mapping, and the
//! mock persistence contract the board talks to.
//!
//! # Module Organization
//!
//! - `model`: the `Task` entity and its draft/patch companions
//! - `store`: the `TaskService` seam and the in-memory mock with simulated
//!   latency
//! - `board`: the `BoardController` orchestrating loads, mutations, filtered
//!   views, and focus mode
//! - `notify`: fire-and-forget notices for the notification layer
//! - `input`: the keyboard-shortcut mapping table consulted by the hosting
//!   shell
//!
//! Rendering, animation, routing, and toast delivery live outside this crate;
//! they consume the controller's observable state and invoke its operations.

pub mod board;
pub mod input;
pub mod model;
pub mod notify;
pub mod store;

pub use board::{BoardController, BoardError, TaskPresentation};
pub use model::{Column, Priority, Status, Task, TaskDraft, TaskPatch};
pub use notify::{Notice, Notifier};
pub use store::{Latency, MemoryStore, StoreError, TaskService};
