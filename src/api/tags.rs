//! Tag routes of the remote forum API.

use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{CreateTagRequest, Tag};
use crate::remote::Remote;

/// Client surface for the tag route family.
#[derive(Clone)]
pub struct TagsApi {
    remote: Arc<Remote>,
}

impl TagsApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// GET /tags - All tags.
    pub async fn list(&self) -> Result<Vec<Tag>, ApiError> {
        self.remote.get("/tags").await
    }

    /// POST /tags - Create a new tag (admin dashboard action).
    pub async fn create(&self, request: &CreateTagRequest) -> Result<Tag, ApiError> {
        self.remote.post("/tags", request).await
    }
}
