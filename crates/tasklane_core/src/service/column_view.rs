//! Status-partitioned column projections.
//!
//! # Responsibility
//! - Derive read-only per-column views of the task collection for rendering.
//!
//! # Invariants
//! - The three columns partition the collection exactly: every task appears
//!   in exactly one column.
//! - Each column preserves the collection's relative order.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::task::{Task, TaskStatus};

/// Filters tasks carrying one status, preserving relative order.
pub fn by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|task| task.status == status).collect()
}

/// Per-column task counts shown in column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCounts {
    pub todo: usize,
    pub inprogress: usize,
    pub completed: usize,
}

impl ColumnCounts {
    /// Total across all columns; equals the collection length.
    pub fn total(&self) -> usize {
        self.todo + self.inprogress + self.completed
    }
}

/// All three column projections derived in one pass.
#[derive(Debug, Default)]
pub struct BoardColumns<'a> {
    pub todo: Vec<&'a Task>,
    pub inprogress: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    /// Partitions the collection by status in a single pass.
    pub fn partition(tasks: &'a [Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::Todo => columns.todo.push(task),
                TaskStatus::InProgress => columns.inprogress.push(task),
                TaskStatus::Completed => columns.completed.push(task),
            }
        }
        columns
    }

    /// Column projection for one status.
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.inprogress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Per-column counts for column headers.
    pub fn counts(&self) -> ColumnCounts {
        ColumnCounts {
            todo: self.todo.len(),
            inprogress: self.inprogress.len(),
            completed: self.completed.len(),
        }
    }
}
