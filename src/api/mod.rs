//! File-listing API abstraction layer.
//!
//! This module defines the `FilesApi` trait, the sole interface for all
//! HTTP interactions with the file-listing backend. Upper-layer modules
//! (`sync`, `grid`) call through this trait and never construct HTTP
//! requests directly, so a backend change only touches this directory.

use crate::error::AppError;
use crate::models::file::FileEntry;

/// Payload for a file upload: the original file name plus its bytes.
#[derive(Debug)]
pub struct UploadParams {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Envelope of the listing endpoint: an ordered sequence of entries
/// under a `files` field.
#[derive(Debug, serde::Deserialize)]
pub struct Listing {
    pub files: Vec<FileEntry>,
}

/// Abstraction trait for file-listing backend interactions.
///
/// All HTTP communication is encapsulated behind this trait. The
/// current implementation is `FilesApiV1`; tests substitute recording
/// fakes to observe request traffic.
pub trait FilesApi: Send + Sync {
    /// Fetch the full file listing snapshot.
    fn list_files(
        &self,
    ) -> impl std::future::Future<Output = std::result::Result<Vec<FileEntry>, AppError>> + Send;

    /// Delete the entries with the given uids in one request.
    ///
    /// Returns the uids the backend reports as deleted; the response
    /// contract is undocumented, so an empty list means only that the
    /// backend did not say.
    fn delete_files(
        &self,
        uids: Vec<String>,
    ) -> impl std::future::Future<Output = std::result::Result<Vec<String>, AppError>> + Send;

    /// Upload one file and return the entry the backend created for it.
    fn upload_file(
        &self,
        params: UploadParams,
    ) -> impl std::future::Future<Output = std::result::Result<FileEntry, AppError>> + Send;
}

pub mod v1;
