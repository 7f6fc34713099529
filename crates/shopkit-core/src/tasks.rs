//! # Task Board
//!
//! A second entity shape over [`EntityStore`]: a small task list with
//! priorities, completion state, and due dates. Exists alongside the
//! catalog to keep the store genuinely generic rather than
//! product-shaped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Entity, EntityId, EntityStore};

// =============================================================================
// Task Types
// =============================================================================

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Listing filter for [`TaskBoard::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// A task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
}

/// Creation fields for a task. New tasks start pending with no due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Partial update for a task.
///
/// `due_date` is doubly optional: the outer `Option` is "change or not",
/// the inner one is "set or clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl Entity for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: TaskDraft) -> Self {
        Task {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            completed: false,
            due_date: None,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}

// =============================================================================
// Task Board
// =============================================================================

/// Task list over an owned [`EntityStore<Task>`].
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: EntityStore<Task>,
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        TaskBoard {
            tasks: EntityStore::new(),
        }
    }

    /// Adds a new pending task and returns it.
    pub fn add_task(&mut self, title: &str, description: &str, priority: Priority) -> &Task {
        debug!(title, "adding task");
        self.tasks.add(TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            priority,
        })
    }

    /// Marks a task completed. Returns whether the task existed.
    pub fn complete(&mut self, task_id: EntityId) -> bool {
        self.tasks
            .update(
                task_id,
                TaskPatch {
                    completed: Some(true),
                    ..TaskPatch::default()
                },
            )
            .is_some()
    }

    /// Sets or clears a task's due date. Returns whether the task existed.
    pub fn set_due_date(&mut self, task_id: EntityId, due_date: Option<NaiveDate>) -> bool {
        self.tasks
            .update(
                task_id,
                TaskPatch {
                    due_date: Some(due_date),
                    ..TaskPatch::default()
                },
            )
            .is_some()
    }

    /// Lists tasks matching the filter, in insertion order.
    pub fn list(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .all()
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => !task.completed,
                TaskFilter::Completed => task.completed,
            })
            .collect()
    }

    /// Lists tasks with the given priority.
    pub fn by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks
            .all()
            .iter()
            .filter(|task| task.priority == priority)
            .collect()
    }

    /// Read access to the underlying store.
    pub fn tasks(&self) -> &EntityStore<Task> {
        &self.tasks
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_starts_pending() {
        let mut board = TaskBoard::new();
        let task = board.add_task("Restock", "Order more laptops", Priority::High);

        assert_eq!(task.id, 1);
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_complete_task() {
        let mut board = TaskBoard::new();
        board.add_task("Restock", "", Priority::Medium);

        assert!(board.complete(1));
        assert!(!board.complete(42));
        assert_eq!(board.list(TaskFilter::Completed).len(), 1);
    }

    #[test]
    fn test_list_filters() {
        let mut board = TaskBoard::new();
        board.add_task("A", "", Priority::Low);
        board.add_task("B", "", Priority::Medium);
        board.complete(1);

        assert_eq!(board.list(TaskFilter::All).len(), 2);
        assert_eq!(board.list(TaskFilter::Pending)[0].title, "B");
        assert_eq!(board.list(TaskFilter::Completed)[0].title, "A");
    }

    #[test]
    fn test_set_and_clear_due_date() {
        let mut board = TaskBoard::new();
        board.add_task("A", "", Priority::Low);
        let date = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();

        assert!(board.set_due_date(1, Some(date)));
        assert_eq!(board.list(TaskFilter::All)[0].due_date, Some(date));

        assert!(board.set_due_date(1, None));
        assert!(board.list(TaskFilter::All)[0].due_date.is_none());
    }

    #[test]
    fn test_by_priority() {
        let mut board = TaskBoard::new();
        board.add_task("A", "", Priority::High);
        board.add_task("B", "", Priority::Low);
        board.add_task("C", "", Priority::High);

        let high: Vec<_> = board
            .by_priority(Priority::High)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(high, vec!["A", "C"]);
    }
}
