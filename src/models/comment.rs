//! Comment model and the fixed feedback classifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed reason categories a viewer attaches to a comment before reporting it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Feedback {
    #[serde(rename = "Spam or Irrelevant")]
    SpamOrIrrelevant,
    #[serde(rename = "Harassment or Abusive")]
    HarassmentOrAbusive,
    #[serde(rename = "Misinformation")]
    Misinformation,
}

impl Feedback {
    /// All selectable classifications, in display order.
    pub const ALL: [Feedback; 3] = [
        Feedback::SpamOrIrrelevant,
        Feedback::HarassmentOrAbusive,
        Feedback::Misinformation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::SpamOrIrrelevant => "Spam or Irrelevant",
            Feedback::HarassmentOrAbusive => "Harassment or Abusive",
            Feedback::Misinformation => "Misinformation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Spam or Irrelevant" => Some(Feedback::SpamOrIrrelevant),
            "Harassment or Abusive" => Some(Feedback::HarassmentOrAbusive),
            "Misinformation" => Some(Feedback::Misinformation),
            _ => None,
        }
    }
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub reported: bool,
    pub created_at: DateTime<Utc>,
}

/// Envelope returned by the comment creation route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEnvelope {
    pub comment: Comment,
}

/// Request body for creating a comment (the author email travels in the query).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

/// Request body for reporting a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCommentRequest {
    pub feedback: Feedback,
}
