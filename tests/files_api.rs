//! End-to-end tests: FilesApiV1 and the sync bridge against an
//! in-process server that mirrors the files backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;

use file_grid::api::v1::{check_connectivity, FilesApiV1};
use file_grid::api::{FilesApi, UploadParams};
use file_grid::grid::config::GridConfig;
use file_grid::grid::controller::GridController;
use file_grid::models::file::FileEntry;
use file_grid::sync::bridge::{GridEvent, LoadState, SyncBridge};

#[derive(Clone)]
struct Backend {
    files: Arc<Mutex<Vec<FileEntry>>>,
    list_hits: Arc<AtomicUsize>,
}

fn entry(uid: &str, name: &str, size: u64) -> FileEntry {
    FileEntry {
        uid: uid.into(),
        name: name.into(),
        size: Some(size),
        depth: 0,
        kind: Some("file".into()),
    }
}

async fn list_handler(State(backend): State<Backend>) -> Json<serde_json::Value> {
    backend.list_hits.fetch_add(1, Ordering::SeqCst);
    let files = backend.files.lock().unwrap().clone();
    Json(json!({ "files": files }))
}

#[derive(Deserialize)]
struct DeleteForm {
    ids: String,
}

async fn delete_handler(
    State(backend): State<Backend>,
    Form(form): Form<DeleteForm>,
) -> Json<serde_json::Value> {
    let ids: Vec<String> = serde_json::from_str(&form.ids).unwrap_or_default();
    let mut files = backend.files.lock().unwrap();
    let mut deleted = Vec::new();
    files.retain(|f| {
        if ids.contains(&f.uid) {
            deleted.push(f.uid.clone());
            false
        } else {
            true
        }
    });
    Json(json!({ "deleted": deleted }))
}

async fn upload_handler(
    State(backend): State<Backend>,
    mut multipart: Multipart,
) -> Json<serde_json::Value> {
    let mut created = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field.bytes().await.unwrap();
            let uid = name.split('.').next().unwrap_or(&name).to_string();
            created = Some(FileEntry {
                uid,
                name,
                size: Some(data.len() as u64),
                depth: 0,
                kind: Some("file".into()),
            });
        }
    }
    let created = created.expect("multipart request carried no file part");
    backend.files.lock().unwrap().push(created.clone());
    Json(json!([created]))
}

/// Bind an ephemeral port, serve the files resource, and return the
/// base URL plus a handle on the in-memory state.
async fn spawn_backend(seed: Vec<FileEntry>) -> (String, Backend) {
    let backend = Backend {
        files: Arc::new(Mutex::new(seed)),
        list_hits: Arc::new(AtomicUsize::new(0)),
    };
    let app = Router::new()
        .route(
            "/api/files/",
            get(list_handler).delete(delete_handler).post(upload_handler),
        )
        .with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), backend)
}

fn bridge_for(base_url: &str) -> SyncBridge<FilesApiV1> {
    let api = FilesApiV1::new(base_url).unwrap();
    let mut config = GridConfig::file_listing("#exampleGrid", format!("{}/api/files/", base_url));
    config.append_actions_column();
    SyncBridge::new(api, GridController::new(config))
}

#[tokio::test]
async fn list_files_returns_seeded_entries() {
    let (base, _backend) = spawn_backend(vec![
        entry("foo", "foo.txt", 124),
        entry("bar", "bar.txt", 124),
    ])
    .await;

    let api = FilesApiV1::new(base.as_str()).unwrap();
    let files = api.list_files().await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].uid, "foo");
    assert_eq!(files[0].size, Some(124));
}

#[tokio::test]
async fn delete_files_reports_deleted_uids() {
    let (base, backend) = spawn_backend(vec![
        entry("foo", "foo.txt", 1),
        entry("bar", "bar.txt", 2),
        entry("baz", "baz.txt", 3),
    ])
    .await;

    let api = FilesApiV1::new(base.as_str()).unwrap();
    let deleted = api
        .delete_files(vec!["foo".into(), "baz".into(), "missing".into()])
        .await
        .unwrap();
    assert_eq!(deleted, vec!["foo", "baz"]);
    assert_eq!(backend.files.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn upload_file_creates_entry_server_side() {
    let (base, backend) = spawn_backend(vec![]).await;

    let api = FilesApiV1::new(base.as_str()).unwrap();
    let created = api
        .upload_file(UploadParams {
            file_name: "report.pdf".into(),
            data: vec![0u8; 16],
        })
        .await
        .unwrap();

    assert_eq!(created.uid, "report");
    assert_eq!(created.name, "report.pdf");
    assert_eq!(created.size, Some(16));
    assert_eq!(backend.files.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn bridge_loads_seeds_and_sorts_grid() {
    let (base, backend) = spawn_backend(vec![
        entry("qiz", "qiz.txt", 124),
        entry("bar", "bar.txt", 124),
        entry("foo", "foo.txt", 124),
        entry("baz", "baz.txt", 124),
    ])
    .await;

    let mut bridge = bridge_for(&base);
    bridge.load_listing().await.unwrap();

    assert!(matches!(bridge.load_state(), LoadState::Loaded(files) if files.len() == 4));
    let names: Vec<&str> = bridge
        .controller()
        .rows()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["bar.txt", "baz.txt", "foo.txt", "qiz.txt"]);
    assert_eq!(backend.list_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bridge_delete_event_removes_rows_and_backend_entries() {
    let (base, backend) = spawn_backend(vec![
        entry("foo", "foo.txt", 1),
        entry("bar", "bar.txt", 2),
    ])
    .await;

    let mut bridge = bridge_for(&base);
    bridge.load_listing().await.unwrap();

    bridge
        .dispatch(GridEvent::BeforeDelete {
            items: vec![entry("foo", "foo.txt", 1)],
        })
        .await
        .unwrap();

    assert_eq!(bridge.controller().len(), 1);
    assert!(bridge.controller().entry("foo").is_none());
    let remaining = backend.files.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].uid, "bar");
}

#[tokio::test]
async fn bridge_upload_adds_one_row_without_refetch() {
    let (base, backend) = spawn_backend(vec![entry("foo", "foo.txt", 1)]).await;

    let mut bridge = bridge_for(&base);
    bridge.load_listing().await.unwrap();
    assert_eq!(backend.list_hits.load(Ordering::SeqCst), 1);

    let created = bridge.upload("notes.txt", b"hello".to_vec()).await.unwrap();

    assert_eq!(created.uid, "notes");
    assert_eq!(bridge.controller().len(), 2);
    assert_eq!(
        backend.list_hits.load(Ordering::SeqCst),
        1,
        "upload must not re-issue the listing GET"
    );
    assert_eq!(backend.files.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn bridge_load_failure_reaches_failed_state() {
    // Nothing is listening on this port.
    let mut bridge = bridge_for("http://127.0.0.1:1");
    let result = bridge.load_listing().await;
    assert!(result.is_err());
    assert!(matches!(bridge.load_state(), LoadState::Failed(_)));
}

#[tokio::test]
async fn connectivity_check_sees_running_backend() {
    let (base, _backend) = spawn_backend(vec![]).await;
    assert!(check_connectivity(&base).await);
}
