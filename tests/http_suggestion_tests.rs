//! HTTP-level tests for the AI suggestion lifecycle.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod common;

use axum::http::StatusCode;
use common::{
    DEFAULT_ADVICE, StubEngine, app, app_with_engine, create_task, register_and_login, request,
    task_id,
};
use serde_json::{Value, json};
use taskwise::task::ports::SuggestionError;

#[tokio::test(flavor = "multi_thread")]
async fn improve_returns_the_suggestion_and_parks_it_on_the_task() {
    let app = app();
    let token = register_and_login(&app, "alice@example.com").await;
    let task = create_task(
        &app,
        &token,
        json!({ "title": "Write tests", "description": "write tests" }),
    )
    .await;
    let id = task_id(&task);

    let (status, body) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("aiSuggestion").and_then(Value::as_str),
        Some(DEFAULT_ADVICE)
    );

    let (_, tasks) = request(&app, "GET", "/tasks", Some(&token), None).await;
    let stored = tasks
        .as_array()
        .and_then(|list| list.first())
        .expect("task should remain");
    assert_eq!(
        stored.get("aiSuggestion").and_then(Value::as_str),
        Some(DEFAULT_ADVICE)
    );
    assert_eq!(
        stored.get("originalDescription").and_then(Value::as_str),
        Some("write tests")
    );
    // The live fields are untouched until the owner decides.
    assert_eq!(
        stored.get("description").and_then(Value::as_str),
        Some("write tests")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn accept_applies_the_suggestion_and_clears_the_ai_fields() {
    let app = app();
    let token = register_and_login(&app, "bob@example.com").await;
    let task = create_task(
        &app,
        &token,
        json!({ "title": "Write tests", "description": "write tests" }),
    )
    .await;
    let id = task_id(&task);

    request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;
    let (status, accepted) = request(
        &app,
        "POST",
        &format!("/tasks/{id}/accept-ai"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        accepted.get("description").and_then(Value::as_str),
        Some(DEFAULT_ADVICE)
    );
    assert_eq!(accepted.get("aiSuggestion"), Some(&Value::Null));
    assert_eq!(accepted.get("originalDescription"), Some(&Value::Null));
    assert_eq!(accepted.get("aiPrioritySuggestion"), Some(&Value::Null));
    assert_eq!(accepted.get("originalPriority"), Some(&Value::Null));
}

#[tokio::test(flavor = "multi_thread")]
async fn undo_restores_the_exact_pre_request_description() {
    let app = app();
    let token = register_and_login(&app, "carol@example.com").await;
    let task = create_task(
        &app,
        &token,
        json!({ "title": "Write tests", "description": "write tests" }),
    )
    .await;
    let id = task_id(&task);

    request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;
    let (status, restored) = request(
        &app,
        "POST",
        &format!("/tasks/{id}/undo-ai"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        restored.get("description").and_then(Value::as_str),
        Some("write tests")
    );
    assert_eq!(restored.get("priority").and_then(Value::as_str), Some("medium"));
    assert_eq!(restored.get("aiSuggestion"), Some(&Value::Null));
}

#[tokio::test(flavor = "multi_thread")]
async fn accept_and_undo_without_a_pending_suggestion_are_not_found() {
    let app = app();
    let token = register_and_login(&app, "dave@example.com").await;
    let task = create_task(&app, &token, json!({ "title": "Clean" })).await;
    let id = task_id(&task);

    let (accept, _) = request(
        &app,
        "POST",
        &format!("/tasks/{id}/accept-ai"),
        Some(&token),
        None,
    )
    .await;
    let (undo, _) = request(
        &app,
        "POST",
        &format!("/tasks/{id}/undo-ai"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(accept, StatusCode::NOT_FOUND);
    assert_eq!(undo, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn improve_for_an_unknown_task_is_not_found() {
    let app = app();
    let token = register_and_login(&app, "erin@example.com").await;

    let (status, _) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": uuid::Uuid::new_v4().to_string() })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn improve_on_someone_elses_task_is_not_found() {
    let app = app();
    let alice = register_and_login(&app, "alice@example.com").await;
    let mallory = register_and_login(&app, "mallory@example.com").await;
    let task = create_task(&app, &alice, json!({ "title": "Private" })).await;
    let id = task_id(&task);

    let (status, _) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&mallory),
        Some(json!({ "taskId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn provider_rate_limiting_surfaces_as_429_and_mutates_nothing() {
    let app = app_with_engine(StubEngine::with_responses([Err(
        SuggestionError::RateLimited,
    )]));
    let token = register_and_login(&app, "frank@example.com").await;
    let task = create_task(
        &app,
        &token,
        json!({ "title": "Quota victim", "description": "unchanged" }),
    )
    .await;
    let id = task_id(&task);

    let (status, _) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (_, tasks) = request(&app, "GET", "/tasks", Some(&token), None).await;
    let stored = tasks
        .as_array()
        .and_then(|list| list.first())
        .expect("task should remain");
    assert_eq!(stored.get("aiSuggestion"), Some(&Value::Null));
    assert_eq!(
        stored.get("description").and_then(Value::as_str),
        Some("unchanged")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn generic_provider_failures_surface_as_500_and_mutate_nothing() {
    let app = app_with_engine(StubEngine::with_responses([Err(
        SuggestionError::Provider("upstream exploded".to_owned()),
    )]));
    let token = register_and_login(&app, "grace@example.com").await;
    let task = create_task(&app, &token, json!({ "title": "Unlucky" })).await;
    let id = task_id(&task);

    let (status, _) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, tasks) = request(&app, "GET", "/tasks", Some(&token), None).await;
    let stored = tasks
        .as_array()
        .and_then(|list| list.first())
        .expect("task should remain");
    assert_eq!(stored.get("aiSuggestion"), Some(&Value::Null));
}

#[tokio::test(flavor = "multi_thread")]
async fn rerequesting_replaces_the_pending_suggestion() {
    let app = app_with_engine(StubEngine::with_responses([
        Ok("First round of advice.".to_owned()),
        Ok("Second round of advice.".to_owned()),
    ]));
    let token = register_and_login(&app, "heidi@example.com").await;
    let task = create_task(
        &app,
        &token,
        json!({ "title": "Write tests", "description": "write tests" }),
    )
    .await;
    let id = task_id(&task);

    request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;
    let (status, body) = request(
        &app,
        "POST",
        "/tasks/improve",
        Some(&token),
        Some(json!({ "taskId": id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("aiSuggestion").and_then(Value::as_str),
        Some("Second round of advice.")
    );

    let (_, tasks) = request(&app, "GET", "/tasks", Some(&token), None).await;
    let stored = tasks
        .as_array()
        .and_then(|list| list.first())
        .expect("task should remain");
    assert_eq!(
        stored.get("originalDescription").and_then(Value::as_str),
        Some("write tests")
    );
}
