//! Drag-and-drop to status-update translation.
//!
//! # Responsibility
//! - Translate a column drop gesture into a status patch on the board.
//!
//! # Invariants
//! - Any status may transition to any status, including itself; a
//!   self-transition still runs the full update/save round.
//! - Unknown task ids are absorbed as `Ok(None)`, never errors.

use crate::model::task::{Task, TaskId, TaskPatch, TaskStatus};
use crate::repo::board_repo::BoardRepository;
use crate::service::board_service::{BoardResult, BoardService};

/// A drop gesture naming the task and the column it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub task_id: TaskId,
    pub target: TaskStatus,
}

/// Applies a drop gesture as a status update on the board.
pub fn apply_drop<R: BoardRepository>(
    board: &mut BoardService<R>,
    event: DropEvent,
) -> BoardResult<Option<Task>> {
    let patch = TaskPatch {
        status: Some(event.target),
        ..TaskPatch::default()
    };
    board.update(event.task_id, &patch)
}
