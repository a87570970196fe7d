//! Comment routes of the remote forum API.

use std::sync::Arc;

use super::{Deleted, Modified};
use crate::errors::ApiError;
use crate::models::{
    Comment, CommentEnvelope, CreateCommentRequest, Feedback, ReportCommentRequest,
};
use crate::remote::Remote;

/// Client surface for the comment route family.
#[derive(Clone)]
pub struct CommentsApi {
    remote: Arc<Remote>,
}

impl CommentsApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// GET /comments/:postId - All comments on a post.
    pub async fn for_post(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.remote.get(&format!("/comments/{}", post_id)).await
    }

    /// POST /posts/:id/comments - Add a comment to a post.
    pub async fn create(
        &self,
        post_id: &str,
        author_email: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        let envelope: CommentEnvelope = self
            .remote
            .post(
                &format!("/posts/{}/comments?email={}", post_id, author_email),
                request,
            )
            .await?;
        Ok(envelope.comment)
    }

    /// PATCH /comments/report/:id - Report a comment with a feedback
    /// classification. A modified count of zero means the comment was already
    /// reported when the request arrived.
    pub async fn report(
        &self,
        comment_id: &str,
        reporter_email: &str,
        feedback: Feedback,
    ) -> Result<Modified, ApiError> {
        self.remote
            .patch_body(
                &format!("/comments/report/{}?email={}", comment_id, reporter_email),
                &ReportCommentRequest { feedback },
            )
            .await
    }

    /// GET /reported/comments - All currently reported comments.
    pub async fn reported(&self) -> Result<Vec<Comment>, ApiError> {
        self.remote.get("/reported/comments").await
    }

    /// PATCH /comments/dismiss/:id - Clear a report, returning the comment to
    /// its un-reported state.
    pub async fn dismiss(&self, comment_id: &str) -> Result<Modified, ApiError> {
        self.remote
            .patch(&format!("/comments/dismiss/{}", comment_id))
            .await
    }

    /// DELETE /comments/:id - Remove a comment from the store.
    pub async fn delete(&self, comment_id: &str) -> Result<Deleted, ApiError> {
        self.remote.delete(&format!("/comments/{}", comment_id)).await
    }
}
