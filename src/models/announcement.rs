//! Announcement model for site-wide notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A site-wide notice posted by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(rename = "_id")]
    pub id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    pub title: String,
    pub description: String,
}
