//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the board columns.
//! - Validate creation drafts and apply explicit field-by-field patches.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `status` and `priority` only ever hold enumerated values; the wire
//!   format cannot smuggle anything else in.
//! - `name` is at least [`MIN_NAME_LEN`] characters after trimming, enforced
//!   at creation only.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum accepted task name length, counted after trimming.
pub const MIN_NAME_LEN: usize = 3;

/// Stable identifier for every task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Column membership for a task.
///
/// Status is a free-form classification, not a progress gate: any value can
/// follow any other, including moving a completed task back to `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Work is underway. Serialized as `inprogress`.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Column order used by presentation layers to lay out the board.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Returns the stable wire/diagnostic name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Urgency label shown on the task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Returns the stable wire/diagnostic name for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// Canonical task record.
///
/// The serialized shape is the durable-slot payload element: field names and
/// enum values are stable and round-trip losslessly through save/load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique ID assigned at creation.
    pub id: TaskId,
    /// Display title, at least [`MIN_NAME_LEN`] characters at creation.
    pub name: String,
    /// Free-text details; may be empty.
    pub description: String,
    /// Column membership.
    pub status: TaskStatus,
    /// Card urgency label.
    pub priority: TaskPriority,
    /// Optional display timestamp in Unix epoch milliseconds. Supplied by
    /// callers for rendering and never enforced at creation.
    pub date: Option<i64>,
}

/// Creation input for [`Task::from_draft`].
///
/// Unset fields fall back to the documented defaults: empty description,
/// `Todo` status, `Low` priority, no date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub date: Option<i64>,
}

impl TaskDraft {
    /// Creates a draft carrying only a name, everything else defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Explicit partial update applied by [`Task::apply_patch`].
///
/// `Some` fields override, `None` fields retain the existing value. There is
/// deliberately no `id` field: identity is immutable. A patch cannot clear
/// `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub date: Option<i64>,
}

/// Validation failure for creation drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Trimmed name is shorter than [`MIN_NAME_LEN`] characters.
    NameTooShort { len: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { len } => write!(
                f,
                "task name must have at least {MIN_NAME_LEN} characters, got {len}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Validates a creation draft and constructs the task.
    ///
    /// # Contract
    /// - `name` is trimmed before the length check and stored trimmed.
    /// - A fresh v4 UUID is assigned; collision with an existing id is ruled
    ///   out with overwhelming probability.
    /// - Pure construction: no I/O, no persistence.
    ///
    /// # Errors
    /// - [`TaskValidationError::NameTooShort`] when the trimmed name has
    ///   fewer than [`MIN_NAME_LEN`] characters.
    pub fn from_draft(draft: TaskDraft) -> Result<Self, TaskValidationError> {
        let name = draft.name.trim();
        let len = name.chars().count();
        if len < MIN_NAME_LEN {
            return Err(TaskValidationError::NameTooShort { len });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: draft.description.unwrap_or_default(),
            status: draft.status.unwrap_or(TaskStatus::Todo),
            priority: draft.priority.unwrap_or(TaskPriority::Low),
            date: draft.date,
        })
    }

    /// Merges a patch over this task, field by field.
    ///
    /// The name length constraint is not re-checked here: it is a
    /// creation-only rule.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
    }
}
