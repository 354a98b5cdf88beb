//! End-to-end session flow over the in-memory store.

use std::sync::Arc;

use chrono::Duration;
use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{
    DashboardView, FinishPrompt, ProgressService, QuestionBank, ResultOutbox, SessionError,
    SessionWorkflow,
};
use storage::repository::{InMemoryStore, PendingSyncRepository, ProgressRepository};
use study_core::model::{SessionType, SubjectKey};
use study_core::time::fixed_clock;

async fn workflow(store: Arc<InMemoryStore>) -> SessionWorkflow {
    let progress = Arc::new(ProgressService::load(store.clone()).await.unwrap());
    SessionWorkflow::new(
        fixed_clock(),
        QuestionBank::builtin(),
        progress,
        ResultOutbox::offline(store),
    )
}

#[tokio::test]
async fn a_quick_session_flows_into_progress_and_the_outbox() {
    let store = Arc::new(InMemoryStore::new());
    let wf = workflow(store.clone()).await;

    let mut rng = StdRng::seed_from_u64(42);
    let mut session = wf
        .start_with_rng(SessionType::Quick, [SubjectKey::Portugues], &mut rng)
        .unwrap();
    assert_eq!(session.plan().len(), 10);

    // Answer the first seven, leave three open.
    for i in 0..7 {
        session.go_to_position(i).unwrap();
        let correct = session.current_question().correct_option();
        session.select_answer(correct).unwrap();
    }
    assert_eq!(
        session.finish_prompt().unwrap(),
        FinishPrompt::ConfirmPartial { unanswered: 3 }
    );

    let result = wf.finish(&mut session).await.unwrap();
    assert_eq!(result.correct(), 7);
    assert_eq!(result.unanswered(), 3);
    assert_eq!(result.percentage(), 70);

    // Durable state reflects the session.
    let state = store.load().await.unwrap().unwrap();
    assert_eq!(state.result_history().len(), 1);
    assert_eq!(state.stats().questions_answered, 10);
    assert_eq!(state.stats().correct_answers, 7);
    assert_eq!(state.stats().streak_days, 1);
    assert!(!state.activities().is_empty());

    // The offline outbox queued the result for later sync.
    assert_eq!(store.len().await.unwrap(), 1);
    let queued = store.list().await.unwrap();
    assert_eq!(queued[0].resource, "tests");

    // And the finished session refuses further input.
    assert!(matches!(
        session.select_answer(0),
        Err(SessionError::InvalidSessionState)
    ));
}

#[tokio::test]
async fn sessions_on_consecutive_days_grow_the_streak() {
    let store = Arc::new(InMemoryStore::new());

    let progress = Arc::new(ProgressService::load(store.clone()).await.unwrap());
    let mut clock = fixed_clock();
    progress.update_streak(&clock).await;
    clock.advance(Duration::days(1));
    progress.update_streak(&clock).await;
    drop(progress);

    // A fresh service sees the persisted streak.
    let reloaded = ProgressService::load(store).await.unwrap();
    assert_eq!(reloaded.snapshot().stats().streak_days, 2);

    let view = DashboardView::from_state(&reloaded.snapshot());
    assert_eq!(view.streak_days, 2);
}

#[tokio::test]
async fn a_read_only_store_still_lets_a_session_run() {
    let store = Arc::new(InMemoryStore::new());
    let wf = workflow(store.clone()).await;
    store.set_fail_writes(true);

    let mut rng = StdRng::seed_from_u64(42);
    let mut session = wf
        .start_with_rng(SessionType::Quick, [SubjectKey::Portugues], &mut rng)
        .unwrap();
    session.select_answer(0).unwrap();

    // Scoring succeeds even though nothing could be persisted or queued.
    let result = wf.finish(&mut session).await.unwrap();
    assert_eq!(result.total(), 10);
    assert!(store.load().await.unwrap().is_none());
    assert_eq!(store.len().await.unwrap(), 0);
}
