//! FilesApiV1 — concrete implementation of the FilesApi trait over a
//! REST files resource (`GET`/`DELETE`/`POST {base}/api/files/`).

use crate::api::{FilesApi, Listing, UploadParams};
use crate::error::AppError;
use crate::models::file::FileEntry;

/// Path of the files resource under the configured base URL.
pub const FILES_PATH: &str = "/api/files/";

const USER_AGENT: &str = "FileGrid/0.1.0";

pub struct FilesApiV1 {
    client: reqwest::Client,
    base_url: String,
}

impl FilesApiV1 {
    pub fn new(base_url: impl Into<String>) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn files_url(&self) -> String {
        format!("{}{}", self.base_url, FILES_PATH)
    }

    /// The `ids` form value: the uid set serialized as a JSON array.
    /// Separated as pub(crate) for unit testing without network.
    pub(crate) fn delete_payload(uids: &[String]) -> crate::error::Result<String> {
        Ok(serde_json::to_string(uids)?)
    }

    /// Pull the deleted uids out of the undocumented delete response.
    /// Anything that is not a `deleted` array of strings yields an
    /// empty list.
    pub(crate) fn parse_deleted(body: &serde_json::Value) -> Vec<String> {
        body["deleted"]
            .as_array()
            .map(|ids| {
                ids.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The upload endpoint answers with a JSON array holding the
    /// created entry; a bare object is tolerated as well.
    pub(crate) fn parse_upload_response(
        body: serde_json::Value,
    ) -> crate::error::Result<FileEntry> {
        let value = match body {
            serde_json::Value::Array(mut items) if !items.is_empty() => items.remove(0),
            obj @ serde_json::Value::Object(_) => obj,
            other => {
                return Err(AppError::Api(format!(
                    "unexpected upload response: {}",
                    other
                )))
            }
        };
        serde_json::from_value(value)
            .map_err(|e| AppError::Api(format!("malformed upload response entry: {}", e)))
    }
}

impl FilesApi for FilesApiV1 {
    async fn list_files(&self) -> crate::error::Result<Vec<FileEntry>> {
        let listing: Listing = self
            .client
            .get(self.files_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(listing.files)
    }

    async fn delete_files(&self, uids: Vec<String>) -> crate::error::Result<Vec<String>> {
        let payload = Self::delete_payload(&uids)?;
        let resp = self
            .client
            .delete(self.files_url())
            .form(&[("ids", payload)])
            .send()
            .await?
            .error_for_status()?;

        // No documented response contract; parse what we can.
        let body: serde_json::Value = resp.json().await.unwrap_or_default();
        Ok(Self::parse_deleted(&body))
    }

    async fn upload_file(&self, params: UploadParams) -> crate::error::Result<FileEntry> {
        let part = reqwest::multipart::Part::bytes(params.data)
            .file_name(params.file_name.clone())
            .mime_str("application/octet-stream")
            .map_err(|e| AppError::Internal(format!("MIME parse error: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let body: serde_json::Value = self
            .client
            .post(self.files_url())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::parse_upload_response(body)
    }
}

/// Lightweight connectivity check against the listing endpoint.
///
/// Sends an HTTP HEAD request with a 5-second timeout. Returns `true`
/// if the server responds (any HTTP status), `false` on network error,
/// timeout, or DNS failure. Offline is a normal application state, not
/// an error condition.
pub async fn check_connectivity(base_url: &str) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };
    let url = format!("{}{}", base_url.trim_end_matches('/'), FILES_PATH);
    client.head(url).send().await.is_ok()
}
