// Lifecycle logging emitted by the engine layer.

use assetx_core::logging_facility::test_capture::init_test_capture;
use assetx_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ASSET_ID, FIELD_CAPABILITY, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND,
};
use assetx_engine::commands::{asset_create, asset_read};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let conn = assetx_store::db::open_ready(temp_dir.path().join("test.db")).unwrap();
    (temp_dir, conn)
}

#[test]
fn test_create_emits_single_start_and_end() {
    let capture = init_test_capture();
    let (_tmp, mut conn) = setup_db();

    asset_create(&mut conn, "log-create-1", "v".to_string()).unwrap();

    let for_asset = |event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("create_asset")
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_ASSET_ID) == Some("log-create-1")
        })
    };
    assert_eq!(for_asset(EVENT_START), 1);
    assert_eq!(for_asset(EVENT_END), 1);
    assert_eq!(for_asset(EVENT_END_ERROR), 0);

    let events = capture.events_for_op("create_asset");
    let start = events
        .iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_START)
                && e.field(FIELD_ASSET_ID) == Some("log-create-1")
        })
        .unwrap();
    assert_eq!(start.field(FIELD_CAPABILITY), Some("mutating"));

    let end = events
        .iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_ASSET_ID) == Some("log-create-1")
        })
        .unwrap();
    assert!(end.field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_failed_read_emits_end_error_with_code() {
    let capture = init_test_capture();
    let (_tmp, mut conn) = setup_db();

    asset_read(&mut conn, "log-missing-2").unwrap_err();

    let events: Vec<_> = capture
        .events_for_op("read_asset")
        .into_iter()
        .filter(|e| e.field(FIELD_ASSET_ID) == Some("log-missing-2"))
        .collect();

    let start = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START))
        .unwrap();
    assert_eq!(start.field(FIELD_CAPABILITY), Some("read-only"));

    assert!(events
        .iter()
        .all(|e| e.event.as_deref() != Some(EVENT_END)));
    let errors: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("NotFound"));
}
