//! Post routes of the remote forum API.

use std::sync::Arc;

use super::{Count, Deleted, Page};
use crate::errors::ApiError;
use crate::models::{CreatePostRequest, Post, PostSort, VoteType};
use crate::remote::Remote;

/// Client surface for the post route family.
#[derive(Clone)]
pub struct PostsApi {
    remote: Arc<Remote>,
}

impl PostsApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// GET /posts - Paginated post listing, newest first or by popularity.
    pub async fn list(&self, page: u32, limit: u32, sort: PostSort) -> Result<Page<Post>, ApiError> {
        self.remote
            .get_query(
                "/posts",
                &[
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                    ("sortBy", sort.as_str().to_string()),
                ],
            )
            .await
    }

    /// GET /search/posts - Paginated tag search.
    pub async fn search(&self, query: &str, page: u32, limit: u32) -> Result<Page<Post>, ApiError> {
        self.remote
            .get_query(
                "/search/posts",
                &[
                    ("q", query.to_string()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    /// GET /posts/:id - A single post with its embedded comments.
    pub async fn get(&self, id: &str) -> Result<Post, ApiError> {
        self.remote.get(&format!("/posts/{}", id)).await
    }

    /// GET /posts/by-user - All posts by one author.
    pub async fn by_author(&self, email: &str) -> Result<Vec<Post>, ApiError> {
        self.remote
            .get_query("/posts/by-user", &[("email", email.to_string())])
            .await
    }

    /// GET /posts/count/:email - How many posts one author has created.
    pub async fn count_by_author(&self, email: &str) -> Result<i64, ApiError> {
        let count: Count = self.remote.get(&format!("/posts/count/{}", email)).await?;
        Ok(count.count)
    }

    /// POST /posts - Create a new post. Callers run the ban and quota gates
    /// first; the remote store remains authoritative.
    pub async fn create(&self, request: &CreatePostRequest) -> Result<Post, ApiError> {
        self.remote.post("/posts", request).await
    }

    /// DELETE /posts/:id - Delete one of the author's own posts.
    pub async fn delete(&self, id: &str, email: &str) -> Result<Deleted, ApiError> {
        self.remote
            .delete(&format!("/posts/{}?email={}", id, email))
            .await
    }

    /// PATCH /posts/:id/upvote|downvote - Record a vote and return the
    /// authoritative aggregate. Not retried: the route is not idempotent-safe.
    pub async fn vote(
        &self,
        id: &str,
        voter_email: &str,
        vote: VoteType,
    ) -> Result<Post, ApiError> {
        self.remote
            .patch(&format!("/posts/{}/{}?email={}", id, vote.as_str(), voter_email))
            .await
    }
}
