//! Fire-and-forget notices for the notification layer.
//!
//! The controller emits a `Notice` after each operation outcome; the hosting
//! shell decides how to surface it (toasts in the original UI). Nothing is
//! returned to the emitter.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::model::Column;

/// Operation outcome signals keyed the way the board raises them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TaskCreated,
    TaskCompleted,
    TaskReopened,
    TaskDeleted,
    TaskMoved(Column),
    FocusOn,
    FocusOff,
    Failure(String),
}

impl Notice {
    /// Human-readable message for display
    pub fn message(&self) -> String {
        match self {
            Notice::TaskCreated => "Task created".to_string(),
            Notice::TaskCompleted => "Task completed".to_string(),
            Notice::TaskReopened => "Task reopened".to_string(),
            Notice::TaskDeleted => "Task deleted".to_string(),
            Notice::TaskMoved(column) => format!("Task moved to {}", column.label()),
            Notice::FocusOn => "Focus mode activated".to_string(),
            Notice::FocusOff => "Focus mode deactivated".to_string(),
            Notice::Failure(message) => message.clone(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }
}

/// Sink for notices. Purely informational; no return value is consumed.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Notifier that routes notices to the tracing subscriber
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_failure() {
            warn!(message = %notice.message(), "board notice");
        } else {
            info!(message = %notice.message(), "board notice");
        }
    }
}

/// Notifier that records every notice, for inspection in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier::default()
    }

    /// Snapshot of all notices recorded so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
