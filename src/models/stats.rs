//! Dashboard statistics payloads.

use serde::{Deserialize, Serialize};

use super::{Comment, Post};

/// Personal activity summary shown on the user dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    #[serde(default)]
    pub posts: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub recent_posts: Vec<Post>,
    #[serde(default)]
    pub recent_comments: Vec<Comment>,
}

/// Site-wide totals shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub posts: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub users: i64,
}
