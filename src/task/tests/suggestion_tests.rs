//! Unit tests for the suggestion state machine on the task aggregate.

use crate::auth::domain::UserId;
use crate::task::domain::{
    Priority, PriorityAdvice, SuggestionState, Task, TaskDomainError, TaskTitle,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn task() -> Task {
    let title = TaskTitle::new("Write tests").expect("valid title");
    Task::new(
        UserId::new(),
        title,
        "write tests".to_owned(),
        Priority::Medium,
        &DefaultClock,
    )
}

fn pending_of(task: &Task) -> &crate::task::domain::PendingSuggestion {
    task.suggestion()
        .as_pending()
        .expect("a suggestion should be pending")
}

#[rstest]
fn attach_snapshots_the_current_description(mut task: Task) {
    task.attach_suggestion("Write unit tests covering edge cases.", None, &DefaultClock);

    let pending = pending_of(&task);
    assert_eq!(pending.text, "Write unit tests covering edge cases.");
    assert_eq!(pending.original_description, "write tests");
    assert_eq!(pending.priority_advice, None);
    assert_eq!(pending.original_priority, None);
    // The suggestion never touches the live fields directly.
    assert_eq!(task.description(), "write tests");
    assert_eq!(task.priority(), Priority::Medium);
}

#[rstest]
fn reattach_retakes_the_snapshot_from_the_current_description(mut task: Task) {
    task.attach_suggestion("First pass.", None, &DefaultClock);
    task.edit(None, Some("write better tests".to_owned()), &DefaultClock);
    task.attach_suggestion("Second pass.", None, &DefaultClock);

    let pending = pending_of(&task);
    assert_eq!(pending.text, "Second pass.");
    assert_eq!(pending.original_description, "write better tests");
}

#[rstest]
fn attach_with_advice_snapshots_the_priority(mut task: Task) {
    task.attach_suggestion(
        "Raise the stakes.",
        Some(PriorityAdvice::Set(Priority::High)),
        &DefaultClock,
    );

    let pending = pending_of(&task);
    assert_eq!(pending.priority_advice, Some(PriorityAdvice::Set(Priority::High)));
    assert_eq!(pending.original_priority, Some(Priority::Medium));
}

#[rstest]
fn accept_applies_the_text_and_clears_the_slot(mut task: Task) {
    task.attach_suggestion("Write unit tests covering edge cases.", None, &DefaultClock);
    task.accept_suggestion(&DefaultClock)
        .expect("accept should succeed");

    assert_eq!(task.description(), "Write unit tests covering edge cases.");
    assert_eq!(task.suggestion(), &SuggestionState::Clean);
    assert_eq!(task.priority(), Priority::Medium);
}

#[rstest]
fn accept_applies_a_concrete_priority_recommendation(mut task: Task) {
    task.attach_suggestion(
        "This is urgent.",
        Some(PriorityAdvice::Set(Priority::High)),
        &DefaultClock,
    );
    task.accept_suggestion(&DefaultClock)
        .expect("accept should succeed");

    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.suggestion(), &SuggestionState::Clean);
}

#[rstest]
fn accept_with_keep_advice_leaves_the_priority_alone(mut task: Task) {
    task.attach_suggestion("Fine as is.", Some(PriorityAdvice::Keep), &DefaultClock);
    task.accept_suggestion(&DefaultClock)
        .expect("accept should succeed");

    assert_eq!(task.priority(), Priority::Medium);
}

#[rstest]
fn accept_from_clean_fails_and_leaves_the_task_unchanged(mut task: Task) {
    let before = task.clone();
    let result = task.accept_suggestion(&DefaultClock);

    assert_eq!(result, Err(TaskDomainError::NoPendingSuggestion(task.id())));
    assert_eq!(task, before);
}

#[rstest]
fn reject_restores_the_exact_snapshot(mut task: Task) {
    task.attach_suggestion("Something fancier.", None, &DefaultClock);
    task.reject_suggestion(&DefaultClock)
        .expect("reject should succeed");

    assert_eq!(task.description(), "write tests");
    assert_eq!(task.suggestion(), &SuggestionState::Clean);
}

#[rstest]
fn reject_without_priority_snapshot_leaves_the_priority_unchanged(mut task: Task) {
    task.attach_suggestion("No priority advice here.", None, &DefaultClock);
    task.reject_suggestion(&DefaultClock)
        .expect("reject should succeed");

    assert_eq!(task.priority(), Priority::Medium);
}

#[rstest]
fn reject_restores_a_taken_priority_snapshot(mut task: Task) {
    task.attach_suggestion(
        "Escalate.",
        Some(PriorityAdvice::Set(Priority::High)),
        &DefaultClock,
    );
    task.accept_suggestion(&DefaultClock)
        .expect("accept should succeed");
    assert_eq!(task.priority(), Priority::High);

    task.attach_suggestion(
        "De-escalate.",
        Some(PriorityAdvice::Set(Priority::Low)),
        &DefaultClock,
    );
    task.reject_suggestion(&DefaultClock)
        .expect("reject should succeed");

    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.suggestion(), &SuggestionState::Clean);
}

#[rstest]
fn reject_from_clean_fails_and_leaves_the_task_unchanged(mut task: Task) {
    let before = task.clone();
    let result = task.reject_suggestion(&DefaultClock);

    assert_eq!(result, Err(TaskDomainError::NoPendingSuggestion(task.id())));
    assert_eq!(task, before);
}

#[rstest]
fn edit_leaves_the_pending_suggestion_alone(mut task: Task) {
    task.attach_suggestion("Pending advice.", None, &DefaultClock);
    let pending_before = pending_of(&task).clone();

    task.edit(
        Some(TaskTitle::new("New title").expect("valid title")),
        None,
        &DefaultClock,
    );

    assert_eq!(task.title().as_str(), "New title");
    assert_eq!(pending_of(&task), &pending_before);
}

#[rstest]
fn set_completed_is_idempotent(mut task: Task) {
    task.set_completed(true, &DefaultClock);
    let after_first = task.completed();
    task.set_completed(true, &DefaultClock);

    assert!(after_first);
    assert!(task.completed());
}

#[rstest]
fn suggestion_serialisation_round_trips(mut task: Task) {
    task.attach_suggestion(
        "Round trip me.",
        Some(PriorityAdvice::Set(Priority::Low)),
        &DefaultClock,
    );

    let serialized = serde_json::to_value(task.suggestion()).expect("serialisation should succeed");
    let restored: SuggestionState =
        serde_json::from_value(serialized).expect("deserialisation should succeed");

    assert_eq!(&restored, task.suggestion());
}
