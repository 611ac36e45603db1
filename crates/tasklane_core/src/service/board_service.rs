//! Board use-case service owning the canonical task collection.
//!
//! # Responsibility
//! - Hold the in-memory task collection in insertion order.
//! - Apply create/update/remove mutations and synchronize the durable slot
//!   after each one.
//!
//! # Invariants
//! - Every successful state-changing mutation is followed by a save of the
//!   entire collection within the same call.
//! - A failed durable write never rolls back the in-memory mutation; memory
//!   stays authoritative and the failure is returned as [`BoardError::Store`].
//! - Unknown-id update/remove are no-ops, never errors.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
use crate::repo::board_repo::{BoardRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardError {
    /// Input rejected before any state change.
    Validation(TaskValidationError),
    /// Durable store failure. The in-memory collection already holds the
    /// mutation (if any) and stays authoritative.
    Store(RepoError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for BoardError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Canonical task store over a repository implementation.
///
/// Single-threaded and synchronous; `&mut self` mutations give single-writer
/// discipline by construction.
pub struct BoardService<R: BoardRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: BoardRepository> BoardService<R> {
    /// Creates an empty board over the provided repository. No implicit load;
    /// call [`BoardService::initialize`] to hydrate from the durable slot.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
        }
    }

    /// Replaces the in-memory collection with the durable slot's contents.
    ///
    /// # Contract
    /// - Absent or corrupt slot payload hydrates an empty board.
    /// - Calling again re-reads the slot wholesale.
    /// - Returns the number of tasks loaded.
    ///
    /// # Errors
    /// - [`BoardError::Store`] on transport failure; the collection is left
    ///   empty and the board remains usable.
    pub fn initialize(&mut self) -> BoardResult<usize> {
        match self.repo.load_tasks() {
            Ok(tasks) => {
                let loaded = tasks.len();
                self.tasks = tasks;
                Ok(loaded)
            }
            Err(err) => {
                self.tasks.clear();
                Err(BoardError::Store(err))
            }
        }
    }

    /// Validates the draft, appends the new task, then saves the collection.
    ///
    /// # Contract
    /// - Validation failure leaves the collection unchanged.
    /// - On a failed save the appended task remains on the board and is
    ///   visible via [`BoardService::list`].
    pub fn create(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        let task = Task::from_draft(draft)?;
        self.tasks.push(task.clone());
        self.repo.save_tasks(&self.tasks)?;
        Ok(task)
    }

    /// Merges the patch into the matching task, then saves the collection.
    ///
    /// # Contract
    /// - Unknown id returns `Ok(None)` with nothing changed or saved.
    /// - `Some` patch fields override, `None` fields retain current values.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> BoardResult<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.apply_patch(patch);
        let updated = task.clone();
        self.repo.save_tasks(&self.tasks)?;
        Ok(Some(updated))
    }

    /// Drops the matching task and saves the collection.
    ///
    /// # Contract
    /// - Idempotent: an unknown id still saves the (unchanged) collection and
    ///   returns `false`.
    pub fn remove(&mut self, id: TaskId) -> BoardResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        self.repo.save_tasks(&self.tasks)?;
        Ok(removed)
    }

    /// Read-only view of the canonical collection in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks on the board.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
