use study_core::model::{
    ProgressState, Question, QuestionId, SessionId, SessionResult, SessionType, StatKey,
    SubjectKey,
};
use study_core::time::{fixed_clock, fixed_now};
use storage::repository::{PendingRecord, PendingSyncRepository, ProgressRepository};
use storage::sqlite::SqliteStore;

fn sample_state() -> ProgressState {
    let mut state = ProgressState::default();
    state.set_subject_progress(SubjectKey::Portugues, 35);
    state.increment_stat(StatKey::QuestionsAnswered, 10);
    state.increment_stat(StatKey::CorrectAnswers, 7);
    state.update_streak(&fixed_clock());
    state.record_result(
        SessionResult::from_counts(
            SessionId::generate(),
            SessionType::Quick,
            vec![SubjectKey::Portugues],
            7,
            3,
            0,
            10,
            312,
            fixed_now(),
        )
        .unwrap(),
    );
    state
}

#[tokio::test]
async fn sqlite_round_trips_the_progress_record() {
    let store = SqliteStore::connect("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    assert!(store.load().await.unwrap().is_none());

    let state = sample_state();
    store.save(&state).await.unwrap();

    let loaded = store.load().await.unwrap().expect("state present");
    assert_eq!(loaded, state);
    assert_eq!(loaded.result_history().len(), 1);
    assert_eq!(loaded.result_history()[0].percentage(), 70);
}

#[tokio::test]
async fn save_overwrites_the_single_record() {
    let store = SqliteStore::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.save(&sample_state()).await.unwrap();
    store.save(&ProgressState::default()).await.unwrap();

    let loaded = store.load().await.unwrap().expect("state present");
    assert_eq!(loaded, ProgressState::default());
}

#[tokio::test]
async fn corrupt_record_reads_as_absent() {
    let store = SqliteStore::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    sqlx::query(
        "INSERT INTO progress_state (id, data, updated_at) VALUES (1, 'not json', '2024-01-01')",
    )
    .execute(store.pool())
    .await
    .unwrap();

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn deleted_record_reads_as_absent() {
    let store = SqliteStore::connect("sqlite:file:memdb_deleted?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.save(&sample_state()).await.unwrap();
    sqlx::query("DELETE FROM progress_state")
        .execute(store.pool())
        .await
        .unwrap();

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn pending_sync_queue_lists_oldest_first() {
    let store = SqliteStore::connect("sqlite:file:memdb_pending?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    let question = Question::new(
        QuestionId::new("pt-1"),
        SubjectKey::Portugues,
        "prompt",
        vec!["a".into(), "b".into()],
        0,
        "",
    )
    .unwrap();

    for (i, payload) in [
        serde_json::to_string(&question).unwrap(),
        "{\"second\":true}".to_string(),
    ]
    .into_iter()
    .enumerate()
    {
        store
            .enqueue(&PendingRecord {
                resource: "tests".into(),
                payload,
                queued_at: fixed_now() + chrono::Duration::seconds(i as i64),
            })
            .await
            .unwrap();
    }

    let records = store.list().await.unwrap();
    assert_eq!(store.len().await.unwrap(), 2);
    assert_eq!(records.len(), 2);
    assert!(records[0].payload.contains("pt-1"));
    assert_eq!(records[1].payload, "{\"second\":true}");
    assert!(records[0].queued_at < records[1].queued_at);
}
