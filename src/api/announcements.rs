//! Announcement routes of the remote forum API.

use std::sync::Arc;

use super::Count;
use crate::errors::ApiError;
use crate::models::{Announcement, CreateAnnouncementRequest};
use crate::remote::Remote;

/// Client surface for the announcement route family.
#[derive(Clone)]
pub struct AnnouncementsApi {
    remote: Arc<Remote>,
}

impl AnnouncementsApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// GET /announcements - All announcements, newest first.
    pub async fn list(&self) -> Result<Vec<Announcement>, ApiError> {
        self.remote.get("/announcements").await
    }

    /// GET /announcements/count - Number of announcements, shown as the
    /// notification badge.
    pub async fn count(&self) -> Result<i64, ApiError> {
        let count: Count = self.remote.get("/announcements/count").await?;
        Ok(count.count)
    }

    /// POST /announcements - Post a new announcement (admin dashboard action).
    pub async fn create(
        &self,
        request: &CreateAnnouncementRequest,
    ) -> Result<Announcement, ApiError> {
        self.remote.post("/announcements", request).await
    }
}
