use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;
use storage::Storage;

#[tokio::test]
async fn sqlite_slot_round_trips_and_overwrites() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_slots?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load_progress("questionBankProgress").await.unwrap(), None);

    repo.save_progress("questionBankProgress", r#"{"0":"notyet"}"#)
        .await
        .unwrap();
    repo.save_progress("questionBankProgress", r#"{"0":"good","1":"poor"}"#)
        .await
        .unwrap();
    repo.save_progress("other", "{}").await.unwrap();

    let stored = repo.load_progress("questionBankProgress").await.unwrap();
    assert_eq!(stored.as_deref(), Some(r#"{"0":"good","1":"poor"}"#));
    assert_eq!(repo.load_progress("other").await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.save_progress("slot", "{}").await.unwrap();

    repo.migrate().await.expect("second migrate");

    assert_eq!(repo.load_progress("slot").await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn storage_sqlite_wires_progress_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.progress.save_progress("deck", r#"{"2":"fair"}"#).await.unwrap();

    assert_eq!(
        storage.progress.load_progress("deck").await.unwrap().as_deref(),
        Some(r#"{"2":"fair"}"#)
    );
}
