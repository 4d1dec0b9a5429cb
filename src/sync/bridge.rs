//! Sync bridge — bridges grid widget lifecycle events to backend calls
//! and keeps the controller's rows in step with the listing resource.

use std::collections::HashSet;
use std::path::Path;

use crate::api::{FilesApi, UploadParams};
use crate::error::AppError;
use crate::grid::controller::GridController;
use crate::models::file::FileEntry;

/// Outcome of the initial listing load.
///
/// The listing is fetched asynchronously; the request's completion
/// updates this state instead of blocking the caller.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    /// The snapshot as fetched, before the controller's display sort.
    Loaded(Vec<FileEntry>),
    Failed(String),
}

/// Widget lifecycle events forwarded to the bridge.
#[derive(Debug, Clone)]
pub enum GridEvent {
    /// Fired before the widget removes a selection of rows.
    BeforeDelete { items: Vec<FileEntry> },
    /// Fired after the upload library finished uploading one item.
    AfterUpload { item: FileEntry },
    /// Fired before the widget re-parents rows via drag-and-drop.
    BeforeMove {
        items: Vec<FileEntry>,
        target_uid: Option<String>,
    },
}

/// What dispatching an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Deleted { uids: Vec<String> },
    Uploaded { uid: String },
    MoveVetoed,
}

/// Owns the grid controller and the API handle; every backend-touching
/// transition goes through here.
pub struct SyncBridge<A: FilesApi> {
    api: A,
    controller: GridController,
    load_state: LoadState,
}

impl<A: FilesApi> SyncBridge<A> {
    pub fn new(api: A, controller: GridController) -> Self {
        Self {
            api,
            controller,
            load_state: LoadState::Loading,
        }
    }

    pub fn controller(&self) -> &GridController {
        &self.controller
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Fetch the listing and seed the grid with the snapshot.
    ///
    /// Records `Loaded`/`Failed` so callers can render an explicit
    /// loading or error state; failures are also logged and returned.
    pub async fn load_listing(&mut self) -> crate::error::Result<()> {
        self.load_state = LoadState::Loading;
        let files = match self.api.list_files().await {
            Ok(files) => files,
            Err(e) => {
                log::error!("Listing fetch failed: {}", e);
                self.load_state = LoadState::Failed(e.to_string());
                return Err(e);
            }
        };
        if let Err(e) = self.controller.seed(files.clone()) {
            log::error!("Listing snapshot rejected: {}", e);
            self.load_state = LoadState::Failed(e.to_string());
            return Err(e);
        }
        self.load_state = LoadState::Loaded(files);
        Ok(())
    }

    /// Route a widget event to its handler.
    pub async fn dispatch(&mut self, event: GridEvent) -> crate::error::Result<EventOutcome> {
        match event {
            GridEvent::BeforeDelete { items } => self.on_before_delete(items).await,
            GridEvent::AfterUpload { item } => self.on_after_upload(item),
            GridEvent::BeforeMove { items, target_uid } => {
                Ok(self.on_before_move(&items, target_uid.as_deref()))
            }
        }
    }

    /// Collect the selected rows' uids (each exactly once, selection
    /// order preserved) and issue a single DELETE for the whole set.
    ///
    /// The rows leave the display regardless of the response — the
    /// widget has already committed to removing them — but a failed
    /// request is logged and surfaced to the caller.
    async fn on_before_delete(
        &mut self,
        items: Vec<FileEntry>,
    ) -> crate::error::Result<EventOutcome> {
        let mut uids = Vec::with_capacity(items.len());
        let mut seen = HashSet::new();
        for item in &items {
            if seen.insert(item.uid.as_str()) {
                uids.push(item.uid.clone());
            }
        }
        if uids.is_empty() {
            return Ok(EventOutcome::Deleted { uids });
        }

        let result = self.api.delete_files(uids.clone()).await;
        self.controller.remove_rows(&uids);
        match result {
            Ok(_deleted) => Ok(EventOutcome::Deleted { uids }),
            Err(e) => {
                log::error!("Delete request failed for {} item(s): {}", uids.len(), e);
                Err(e)
            }
        }
    }

    /// Insert the uploaded item into the displayed rows. The listing
    /// is not re-fetched.
    fn on_after_upload(&mut self, item: FileEntry) -> crate::error::Result<EventOutcome> {
        let uid = item.uid.clone();
        self.controller.insert_row(item)?;
        Ok(EventOutcome::Uploaded { uid })
    }

    /// Moves are disabled: log the payload and veto unconditionally.
    /// The displayed order is never mutated.
    fn on_before_move(&self, items: &[FileEntry], target_uid: Option<&str>) -> EventOutcome {
        let uids: Vec<&str> = items.iter().map(|i| i.uid.as_str()).collect();
        log::info!(
            "Move vetoed: items={:?}, target={:?}",
            uids,
            target_uid
        );
        EventOutcome::MoveVetoed
    }

    /// Upload a file through the API and insert the entry the backend
    /// created, without re-fetching the listing.
    pub async fn upload(
        &mut self,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> crate::error::Result<FileEntry> {
        let params = UploadParams {
            file_name: file_name.into(),
            data,
        };
        let entry = match self.api.upload_file(params).await {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("Upload failed: {}", e);
                return Err(e);
            }
        };
        self.controller.insert_row(entry.clone())?;
        Ok(entry)
    }

    /// Upload a local file, taking the file name from the path.
    pub async fn upload_from_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> crate::error::Result<FileEntry> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::Io(format!("path has no file name: {}", path.display())))?
            .to_string();
        let data = read_file_data(path).await?;
        self.upload(file_name, data).await
    }
}

/// Read a whole file off the async runtime.
///
/// Uses spawn_blocking to avoid blocking the tokio runtime.
pub async fn read_file_data(path: &Path) -> crate::error::Result<Vec<u8>> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || std::fs::read(&path).map_err(AppError::from))
        .await
        .map_err(|e| AppError::Internal(format!("spawn_blocking join error: {}", e)))?
}
