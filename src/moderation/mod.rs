//! Comment moderation lifecycle and write gating.
//!
//! A comment moves `Clean -> Reported -> { Dismissed, Removed }`. Dismissal
//! clears the report and the comment can be reported again; removal deletes
//! it from the store. The ban and quota gates run before any write leaves the
//! client, and every rejection is a distinct named condition so the view can
//! show the exact reason.

use crate::api::{CommentsApi, UsersApi};
use crate::errors::ApiError;
use crate::models::{Badge, Comment, Feedback, User};

/// Maximum number of posts a bronze-tier account may create.
pub const BRONZE_POST_LIMIT: i64 = 5;

/// Lifecycle position of a comment that still exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Clean,
    Reported,
}

/// Where a comment currently is in its lifecycle.
pub fn comment_state(comment: &Comment) -> CommentState {
    if comment.reported {
        CommentState::Reported
    } else {
        CommentState::Clean
    }
}

/// Reject any write from a banned account.
pub fn ensure_not_banned(user: &User) -> Result<(), ApiError> {
    if user.banned {
        return Err(ApiError::Banned(
            "Account banned: you cannot post, comment, or vote".to_string(),
        ));
    }
    Ok(())
}

/// Reject post creation once a bronze account has used its quota. Gold
/// accounts bypass the check entirely.
pub fn ensure_post_quota(user: &User, post_count: i64) -> Result<(), ApiError> {
    if user.badge == Badge::Bronze && post_count >= BRONZE_POST_LIMIT {
        return Err(ApiError::QuotaExceeded {
            message: format!(
                "Post limit of {} reached: become a gold member for unlimited posting",
                BRONZE_POST_LIMIT
            ),
            post_count,
        });
    }
    Ok(())
}

/// Reject moderator actions from non-admin accounts.
pub fn ensure_moderator(user: &User) -> Result<(), ApiError> {
    if !user.role.is_admin() {
        return Err(ApiError::Forbidden(
            "Moderator actions require the admin role".to_string(),
        ));
    }
    Ok(())
}

/// Validate a report request against the comment's current state.
///
/// Reporting requires a feedback classification and a comment that is not
/// already reported; both failures are distinct conditions.
pub fn validate_report(comment: &Comment, feedback: Option<Feedback>) -> Result<Feedback, ApiError> {
    if comment_state(comment) == CommentState::Reported {
        return Err(ApiError::AlreadyReported(
            "This comment has already been reported".to_string(),
        ));
    }
    feedback.ok_or_else(|| {
        ApiError::MissingFeedback("Select a feedback category before reporting".to_string())
    })
}

/// Cached comment list for one post view.
///
/// Feedback selection is tracked here rather than written onto the fetched
/// comment in place, so a pending choice is always observable before the
/// report is sent.
#[derive(Debug, Clone)]
pub struct CommentsView {
    comments: Vec<Comment>,
}

impl CommentsView {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Record the viewer's feedback choice on a comment. Selection is locked
    /// once the comment is reported.
    pub fn select_feedback(
        &mut self,
        comment_id: &str,
        feedback: Feedback,
    ) -> Result<(), ApiError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| ApiError::NotFound(format!("Comment {} not found", comment_id)))?;

        if comment.reported {
            return Err(ApiError::AlreadyReported(
                "This comment has already been reported".to_string(),
            ));
        }

        comment.feedback = Some(feedback);
        Ok(())
    }

    /// Replace a comment after a server-confirmed transition.
    pub fn apply(&mut self, updated: Comment) {
        if let Some(slot) = self.comments.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated;
        }
    }

    /// Drop a removed comment from the view.
    pub fn remove(&mut self, comment_id: &str) {
        self.comments.retain(|c| c.id != comment_id);
    }
}

/// Drives the comment lifecycle transitions against the remote store.
#[derive(Clone)]
pub struct Moderation {
    comments: CommentsApi,
    users: UsersApi,
}

impl Moderation {
    pub(crate) fn new(comments: CommentsApi, users: UsersApi) -> Self {
        Self { comments, users }
    }

    /// `Clean -> Reported`. Returns the comment as it now stands.
    ///
    /// The gates run on the cached state first; the store's modified count
    /// then catches the race where another viewer reported it in between.
    pub async fn report(
        &self,
        viewer: &User,
        comment: &Comment,
        feedback: Option<Feedback>,
    ) -> Result<Comment, ApiError> {
        ensure_not_banned(viewer)?;
        let feedback = validate_report(comment, feedback)?;

        let modified = self
            .comments
            .report(&comment.id, &viewer.email, feedback)
            .await?;
        if modified.modified_count == 0 {
            return Err(ApiError::AlreadyReported(
                "This comment has already been reported".to_string(),
            ));
        }

        tracing::info!(comment_id = %comment.id, feedback = feedback.as_str(), "Comment reported");
        Ok(Comment {
            feedback: Some(feedback),
            reported: true,
            ..comment.clone()
        })
    }

    /// `Reported -> Dismissed` (moderator only). Clears the feedback and the
    /// reported flag; the comment can be reported again later.
    pub async fn dismiss(&self, moderator: &User, comment: &Comment) -> Result<Comment, ApiError> {
        ensure_moderator(moderator)?;
        if comment_state(comment) != CommentState::Reported {
            return Err(ApiError::Validation(
                "Only a reported comment can be dismissed".to_string(),
            ));
        }

        self.comments.dismiss(&comment.id).await?;

        tracing::info!(comment_id = %comment.id, "Report dismissed");
        Ok(Comment {
            feedback: None,
            reported: false,
            ..comment.clone()
        })
    }

    /// `Reported -> Removed` (moderator only). Terminal: the comment is
    /// deleted from the store.
    pub async fn remove(&self, moderator: &User, comment: &Comment) -> Result<(), ApiError> {
        ensure_moderator(moderator)?;
        if comment_state(comment) != CommentState::Reported {
            return Err(ApiError::Validation(
                "Only a reported comment can be removed".to_string(),
            ));
        }

        self.comments.delete(&comment.id).await?;
        tracing::info!(comment_id = %comment.id, "Comment removed");
        Ok(())
    }

    /// Ban the comment's author (moderator only). The comment itself is left
    /// as it stands; the ban gates all future writes by that account.
    pub async fn ban_author(&self, moderator: &User, comment: &Comment) -> Result<(), ApiError> {
        ensure_moderator(moderator)?;
        self.users.ban(&comment.user_id).await?;
        tracing::info!(user_id = %comment.user_id, "Author banned");
        Ok(())
    }

    /// All currently reported comments (moderator only).
    pub async fn reported_comments(&self, moderator: &User) -> Result<Vec<Comment>, ApiError> {
        ensure_moderator(moderator)?;
        self.comments.reported().await
    }
}
