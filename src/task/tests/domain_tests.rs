//! Unit tests for task domain scalar types.

use crate::auth::domain::UserId;
use crate::task::domain::{
    ParsePriorityError, Priority, PriorityAdvice, SuggestionState, Task, TaskDomainError, TaskId,
    TaskTitle,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn task_ids_are_unique() {
    assert_ne!(TaskId::new(), TaskId::new());
}

#[rstest]
#[case("Write tests", "Write tests")]
#[case("  padded  ", "padded")]
fn task_title_trims_input(#[case] raw: &str, #[case] expected: &str) {
    let title = TaskTitle::new(raw).expect("title should validate");
    assert_eq!(title.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_round_trips_through_storage_form(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
fn priority_parse_normalises_case_and_whitespace() {
    assert_eq!(Priority::try_from(" High "), Ok(Priority::High));
}

#[rstest]
fn priority_parse_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[rstest]
#[case(PriorityAdvice::Keep, "keep")]
#[case(PriorityAdvice::Set(Priority::High), "high")]
fn priority_advice_round_trips_through_storage_form(
    #[case] advice: PriorityAdvice,
    #[case] text: &str,
) {
    assert_eq!(advice.as_str(), text);
    assert_eq!(PriorityAdvice::try_from(text), Ok(advice));
}

#[rstest]
fn priority_advice_serialises_as_a_bare_string() {
    let serialized =
        serde_json::to_string(&PriorityAdvice::Keep).expect("serialisation should succeed");
    assert_eq!(serialized, "\"keep\"");

    let parsed: PriorityAdvice =
        serde_json::from_str("\"low\"").expect("deserialisation should succeed");
    assert_eq!(parsed, PriorityAdvice::Set(Priority::Low));
}

#[rstest]
fn new_task_starts_clean_and_incomplete() {
    let title = TaskTitle::new("Write tests").expect("valid title");
    let task = Task::new(
        UserId::new(),
        title,
        String::new(),
        Priority::default(),
        &DefaultClock,
    );

    assert!(!task.completed());
    assert_eq!(task.priority(), Priority::Medium);
    assert_eq!(task.suggestion(), &SuggestionState::Clean);
    assert_eq!(task.description(), "");
    assert_eq!(task.created_at(), task.updated_at());
}
