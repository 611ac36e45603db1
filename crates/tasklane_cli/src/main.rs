//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklane_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklane_core::{
    apply_drop, open_db_in_memory, BoardColumns, BoardService, DropEvent, SqliteBoardRepository,
    TaskDraft, TaskStatus,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("tasklane_core version={}", tasklane_core::core_version());

    // Why: run one full board cycle against an in-memory database to validate
    // core wiring without touching the filesystem.
    let conn = open_db_in_memory()?;
    let repo = SqliteBoardRepository::try_new(&conn)?;
    let mut board = BoardService::new(repo);
    board.initialize()?;

    let task = board.create(TaskDraft::new("smoke task"))?;
    let moved = apply_drop(
        &mut board,
        DropEvent {
            task_id: task.id,
            target: TaskStatus::InProgress,
        },
    )?;
    println!("tasklane_cli smoke moved={}", moved.is_some());

    let counts = BoardColumns::partition(board.list()).counts();
    println!(
        "tasklane_cli smoke todo={} inprogress={} completed={}",
        counts.todo, counts.inprogress, counts.completed
    );

    Ok(())
}
