use rusqlite::Connection;
use std::collections::HashSet;
use tasklane_core::db::open_db_in_memory;
use tasklane_core::{
    apply_drop, by_status, BoardColumns, BoardService, DropEvent, SqliteBoardRepository,
    TaskDraft, TaskId, TaskStatus,
};

#[test]
fn partition_places_every_task_in_exactly_one_column() {
    let conn = open_db_in_memory().unwrap();
    let mut board = new_board(&conn);

    board.create(draft("write intro", TaskStatus::Todo)).unwrap();
    board
        .create(draft("draft outline", TaskStatus::InProgress))
        .unwrap();
    board
        .create(draft("ship alpha", TaskStatus::Completed))
        .unwrap();
    board
        .create(draft("review notes", TaskStatus::Todo))
        .unwrap();

    let columns = BoardColumns::partition(board.list());
    let counts = columns.counts();
    assert_eq!(counts.total(), board.len());
    assert_eq!(counts.todo, 2);
    assert_eq!(counts.inprogress, 1);
    assert_eq!(counts.completed, 1);

    let mut seen: HashSet<TaskId> = HashSet::new();
    for status in TaskStatus::ALL {
        for task in columns.column(status) {
            assert_eq!(task.status, status);
            assert!(seen.insert(task.id), "task listed in two columns");
        }
    }
    let all_ids: HashSet<TaskId> = board.list().iter().map(|task| task.id).collect();
    assert_eq!(seen, all_ids);
}

#[test]
fn projections_preserve_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut board = new_board(&conn);

    board.create(draft("first", TaskStatus::Todo)).unwrap();
    board
        .create(draft("second", TaskStatus::Completed))
        .unwrap();
    board.create(draft("third", TaskStatus::Todo)).unwrap();

    let todo = by_status(board.list(), TaskStatus::Todo);
    let names: Vec<&str> = todo.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, vec!["first", "third"]);
}

#[test]
fn created_task_lands_in_todo_and_moves_on_drop() {
    let conn = open_db_in_memory().unwrap();
    let mut board = new_board(&conn);

    let task = board.create(TaskDraft::new("walk the board")).unwrap();

    let columns = BoardColumns::partition(board.list());
    assert!(columns.todo.iter().any(|candidate| candidate.id == task.id));
    assert!(columns.inprogress.is_empty());

    apply_drop(
        &mut board,
        DropEvent {
            task_id: task.id,
            target: TaskStatus::InProgress,
        },
    )
    .unwrap();

    let columns = BoardColumns::partition(board.list());
    assert!(columns.todo.is_empty());
    assert!(columns
        .inprogress
        .iter()
        .any(|candidate| candidate.id == task.id));

    // The move is durable: a fresh service sees the task in progress.
    let reopened = new_board(&conn);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].status, TaskStatus::InProgress);
}

fn draft(name: &str, status: TaskStatus) -> TaskDraft {
    TaskDraft {
        status: Some(status),
        ..TaskDraft::new(name)
    }
}

fn new_board(conn: &Connection) -> BoardService<SqliteBoardRepository<'_>> {
    let repo = SqliteBoardRepository::try_new(conn).unwrap();
    let mut board = BoardService::new(repo);
    board.initialize().unwrap();
    board
}
