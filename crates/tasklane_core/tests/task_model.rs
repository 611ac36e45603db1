use tasklane_core::{
    Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus, TaskValidationError, MIN_NAME_LEN,
};
use uuid::Uuid;

#[test]
fn from_draft_applies_documented_defaults() {
    let task = Task::from_draft(TaskDraft::new("plan sprint")).unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.name, "plan sprint");
    assert_eq!(task.description, "");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Low);
    assert_eq!(task.date, None);
}

#[test]
fn from_draft_honors_explicit_fields() {
    let draft = TaskDraft {
        name: "ship release".to_string(),
        description: Some("cut the tag".to_string()),
        status: Some(TaskStatus::InProgress),
        priority: Some(TaskPriority::High),
        date: Some(1_700_000_000_000),
    };

    let task = Task::from_draft(draft).unwrap();
    assert_eq!(task.description, "cut the tag");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.date, Some(1_700_000_000_000));
}

#[test]
fn from_draft_assigns_unique_ids() {
    let first = Task::from_draft(TaskDraft::new("first")).unwrap();
    let second = Task::from_draft(TaskDraft::new("second")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn from_draft_trims_name_before_validation() {
    let err = Task::from_draft(TaskDraft::new("  ab  ")).unwrap_err();
    assert!(matches!(err, TaskValidationError::NameTooShort { len: 2 }));

    let task = Task::from_draft(TaskDraft::new("  abc  ")).unwrap();
    assert_eq!(task.name, "abc");
}

#[test]
fn minimum_name_length_is_a_boundary() {
    assert_eq!(MIN_NAME_LEN, 3);
    assert!(Task::from_draft(TaskDraft::new("ab")).is_err());
    assert!(Task::from_draft(TaskDraft::new("abc")).is_ok());
}

#[test]
fn apply_patch_merges_only_some_fields() {
    let mut task = Task::from_draft(TaskDraft::new("keep my name")).unwrap();
    let original_id = task.id;

    task.apply_patch(&TaskPatch {
        status: Some(TaskStatus::Completed),
        priority: Some(TaskPriority::Medium),
        ..TaskPatch::default()
    });

    assert_eq!(task.id, original_id);
    assert_eq!(task.name, "keep my name");
    assert_eq!(task.description, "");
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.priority, TaskPriority::Medium);

    task.apply_patch(&TaskPatch {
        description: Some("late details".to_string()),
        ..TaskPatch::default()
    });
    assert_eq!(task.description, "late details");
    assert_eq!(task.status, TaskStatus::Completed);
}

#[test]
fn patch_accepts_name_below_creation_minimum() {
    let mut task = Task::from_draft(TaskDraft::new("long enough")).unwrap();

    task.apply_patch(&TaskPatch {
        name: Some("x".to_string()),
        ..TaskPatch::default()
    });

    assert_eq!(task.name, "x");
    assert!(task.name.chars().count() < MIN_NAME_LEN);
}

#[test]
fn empty_patch_cannot_clear_date() {
    let draft = TaskDraft {
        date: Some(1_700_000_000_000),
        ..TaskDraft::new("dated task")
    };
    let mut task = Task::from_draft(draft).unwrap();

    task.apply_patch(&TaskPatch::default());
    assert_eq!(task.date, Some(1_700_000_000_000));
}

#[test]
fn task_serializes_with_stable_wire_names() {
    let draft = TaskDraft {
        status: Some(TaskStatus::InProgress),
        priority: Some(TaskPriority::High),
        ..TaskDraft::new("wire check")
    };
    let task = Task::from_draft(draft).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["status"], "inprogress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["name"], "wire check");
    assert!(json["date"].is_null());
    assert_eq!(json["id"], task.id.to_string());
}

#[test]
fn task_roundtrips_through_json() {
    let draft = TaskDraft {
        description: Some("full record".to_string()),
        status: Some(TaskStatus::Completed),
        priority: Some(TaskPriority::Medium),
        date: Some(1_700_000_000_000),
        ..TaskDraft::new("roundtrip")
    };
    let task = Task::from_draft(draft).unwrap();

    let payload = serde_json::to_string(&task).unwrap();
    let restored: Task = serde_json::from_str(&payload).unwrap();
    assert_eq!(restored, task);
}

#[test]
fn payload_without_date_key_deserializes_with_none() {
    let payload = format!(
        r#"{{"id":"{}","name":"legacy record","description":"","status":"todo","priority":"low"}}"#,
        Uuid::new_v4()
    );

    let task: Task = serde_json::from_str(&payload).unwrap();
    assert_eq!(task.date, None);
}

#[test]
fn payload_with_unknown_extra_key_is_tolerated() {
    let payload = format!(
        r#"{{"id":"{}","name":"extra record","description":"","status":"todo","priority":"low","color":"red"}}"#,
        Uuid::new_v4()
    );

    let task: Task = serde_json::from_str(&payload).unwrap();
    assert_eq!(task.name, "extra record");
}

#[test]
fn payload_with_unknown_status_value_is_rejected() {
    let payload = format!(
        r#"{{"id":"{}","name":"bad status","description":"","status":"done","priority":"low"}}"#,
        Uuid::new_v4()
    );

    assert!(serde_json::from_str::<Task>(&payload).is_err());
}

#[test]
fn enum_wire_names_are_stable() {
    assert_eq!(TaskStatus::Todo.as_str(), "todo");
    assert_eq!(TaskStatus::InProgress.as_str(), "inprogress");
    assert_eq!(TaskStatus::Completed.as_str(), "completed");
    assert_eq!(TaskPriority::Low.as_str(), "low");
    assert_eq!(TaskPriority::Medium.as_str(), "medium");
    assert_eq!(TaskPriority::High.as_str(), "high");

    assert_eq!(
        TaskStatus::ALL,
        [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Completed
        ]
    );
}
