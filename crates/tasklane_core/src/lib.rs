//! Core task-board engine for TaskLane.
//! This crate is the single source of truth for board state and persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    Task, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskStatus, TaskValidationError,
    MIN_NAME_LEN,
};
pub use repo::board_repo::{
    BoardRepository, RepoError, RepoResult, SqliteBoardRepository, TASKS_SLOT,
};
pub use service::board_service::{BoardError, BoardResult, BoardService};
pub use service::column_view::{by_status, BoardColumns, ColumnCounts};
pub use service::drag_drop::{apply_drop, DropEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
