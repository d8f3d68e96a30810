//! Files service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::FileId;
use tracing::instrument;

/// Files service
#[derive(Debug, Clone)]
pub struct FilesService {
    api: SlackApi,
}

impl FilesService {
    /// Create a new files service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List files
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListFilesRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("files.list", Params::from_request(&request)?)
            .await
    }

    /// Get file info
    #[instrument(skip(self), fields(file = %request.file))]
    pub async fn info(&self, request: FileInfoRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("files.info", Params::from_request(&request)?)
            .await
    }

    /// Upload a file
    #[instrument(skip(self, request), fields(
        file_name = %request.file.file_name,
        size = request.file.content.len()
    ))]
    pub async fn upload(&self, request: UploadFileRequest) -> SlackResult<SlackResponse> {
        let params = Params::from_request(&request)?;
        self.api.upload("files.upload", params, request.file).await
    }

    /// Delete a file
    #[instrument(skip(self))]
    pub async fn delete(&self, file: &FileId) -> SlackResult<SlackResponse> {
        self.api
            .post("files.delete", Params::new().set("file", file))
            .await
    }

    /// Enable public sharing of a file
    #[instrument(skip(self))]
    pub async fn shared_public_url(&self, file: &FileId) -> SlackResult<SlackResponse> {
        self.api
            .post("files.sharedPublicURL", Params::new().set("file", file))
            .await
    }

    /// Revoke public sharing of a file
    #[instrument(skip(self))]
    pub async fn revoke_public_url(&self, file: &FileId) -> SlackResult<SlackResponse> {
        self.api
            .post("files.revokePublicURL", Params::new().set("file", file))
            .await
    }
}
