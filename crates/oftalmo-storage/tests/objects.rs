use oftalmo_storage::error::StorageError;
use oftalmo_storage::objects::{get_object, list_objects, put_object};

#[tokio::test]
async fn put_then_get_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    put_object(dir.path(), "patients/a.json", b"{}".to_vec())
        .await
        .unwrap();

    let output = get_object(dir.path(), "patients/a.json").await.unwrap();
    assert_eq!(output.body, b"{}");
}

#[tokio::test]
async fn missing_object_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = get_object(dir.path(), "patients/missing.json")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, StorageError::NotFound { key } if key == "patients/missing.json"));
}

#[tokio::test]
async fn keys_cannot_escape_the_root() {
    let dir = tempfile::tempdir().unwrap();
    for key in ["../outside.json", "/etc/passwd", "", "patients/../../x"] {
        let err = put_object(dir.path(), key, Vec::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }), "{key}");
    }
}

#[tokio::test]
async fn list_is_sorted_and_scoped_to_prefix() {
    let dir = tempfile::tempdir().unwrap();
    for key in ["patients/b.json", "patients/a.json", "attendances/c.json"] {
        put_object(dir.path(), key, b"{}".to_vec()).await.unwrap();
    }
    // Leftover from an interrupted write.
    std::fs::write(dir.path().join("patients/z.json.tmp"), b"{").unwrap();

    let keys = list_objects(dir.path(), "patients/").await.unwrap();
    assert_eq!(keys, vec!["patients/a.json", "patients/b.json"]);
}

#[tokio::test]
async fn list_of_missing_prefix_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_objects(dir.path(), "attendances/").await.unwrap().is_empty());
}

#[tokio::test]
async fn overwrite_replaces_body() {
    let dir = tempfile::tempdir().unwrap();
    put_object(dir.path(), "k/v.json", b"1".to_vec()).await.unwrap();
    put_object(dir.path(), "k/v.json", b"2".to_vec()).await.unwrap();
    assert_eq!(get_object(dir.path(), "k/v.json").await.unwrap().body, b"2");
}
