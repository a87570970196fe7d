//! Post model with its vote aggregate, as served by the remote forum API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Comment;

/// Direction of a vote on a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteType {
    #[serde(rename = "upvote")]
    Up,
    #[serde(rename = "downvote")]
    Down,
}

impl VoteType {
    /// Wire value, also used as the vote route segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "upvote",
            VoteType::Down => "downvote",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upvote" => Some(VoteType::Up),
            "downvote" => Some(VoteType::Down),
            _ => None,
        }
    }
}

/// A single user's recorded vote direction on one post.
///
/// At most one record exists per (post, voter email) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub voter_email: String,
    pub vote_type: VoteType,
}

/// A forum post.
///
/// `up_vote`/`down_vote` must equal the count of vote records of each type;
/// the vote reconciler preserves this invariant on every local mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    pub title: String,
    pub description: String,
    pub tag: String,
    #[serde(default)]
    pub up_vote: i64,
    #[serde(default)]
    pub down_vote: i64,
    #[serde(default)]
    pub voters: Vec<VoteRecord>,
    pub created_at: DateTime<Utc>,
    /// Embedded on the detail view, absent on list views
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    /// Server-computed on list views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_difference: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<i64>,
}

impl Post {
    /// The recorded vote direction of one voter, if any.
    pub fn vote_of(&self, voter_email: &str) -> Option<VoteType> {
        self.voters
            .iter()
            .find(|v| v.voter_email == voter_email)
            .map(|v| v.vote_type)
    }
}

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostSort {
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "popularity")]
    Popularity,
}

impl PostSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostSort::Newest => "newest",
            PostSort::Popularity => "popularity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(PostSort::Newest),
            "popularity" => Some(PostSort::Popularity),
            _ => None,
        }
    }
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author_name: String,
    pub author_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    pub title: String,
    pub description: String,
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_type_wire_values() {
        assert_eq!(VoteType::Up.as_str(), "upvote");
        assert_eq!(VoteType::from_str("downvote"), Some(VoteType::Down));
        assert_eq!(VoteType::from_str("sideways"), None);

        let json = serde_json::to_string(&VoteType::Up).unwrap();
        assert_eq!(json, "\"upvote\"");
    }

    #[test]
    fn test_post_wire_shape() {
        let json = r#"{
            "_id": "p1",
            "authorName": "Alice",
            "authorEmail": "alice@example.com",
            "title": "Hello",
            "description": "First post",
            "tag": "intro",
            "upVote": 2,
            "downVote": 1,
            "voters": [
                {"voterEmail": "bob@example.com", "voteType": "upvote"}
            ],
            "createdAt": "2025-01-01T00:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.up_vote, 2);
        assert_eq!(post.vote_of("bob@example.com"), Some(VoteType::Up));
        assert_eq!(post.vote_of("alice@example.com"), None);
        assert!(post.comments.is_empty());
    }
}
