//! Agora Forum Client Core
//!
//! The client-side heart of the Agora community forum: a typed surface over
//! the remote data API, the optimistic vote reconciler, and the comment
//! moderation state machine. Rendering and routing live in the shell around
//! this crate; everything here is plain state and I/O.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod moderation;
pub mod reconcile;
pub mod remote;
pub mod session;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::{
    AnnouncementsApi, CommentsApi, Page, PaymentsApi, PostsApi, TagsApi, UsersApi,
    GOLD_MEMBERSHIP_USD,
};
use dashboard::{DashboardView, Dashboards};
use models::{
    Comment, CreateCommentRequest, CreatePostRequest, PaymentConfirmation, PaymentCustomer,
    PaymentIntent, PaymentStatus, Post, PostSort, VoteType,
};
use moderation::Moderation;
use reconcile::{VoteAction, VoteReconciler};
use remote::Remote;

pub use config::Config;
pub use errors::ApiError;
pub use session::{Session, SessionSnapshot};

/// Composition root wiring the session and transport into the API surfaces.
///
/// Cloning shares the underlying transport and session.
#[derive(Clone)]
pub struct ForumClient {
    pub posts: PostsApi,
    pub comments: CommentsApi,
    pub users: UsersApi,
    pub tags: TagsApi,
    pub announcements: AnnouncementsApi,
    pub payments: PaymentsApi,
    pub moderation: Moderation,
    pub dashboards: Dashboards,
    session: Session,
    config: Arc<Config>,
}

impl ForumClient {
    pub fn new(config: Config, session: Session) -> Result<Self, ApiError> {
        let remote = Arc::new(Remote::new(&config, session.clone())?);

        let posts = PostsApi::new(remote.clone());
        let comments = CommentsApi::new(remote.clone());
        let users = UsersApi::new(remote.clone());
        let tags = TagsApi::new(remote.clone());
        let announcements = AnnouncementsApi::new(remote.clone());
        let payments = PaymentsApi::new(remote.clone());
        let moderation = Moderation::new(comments.clone(), users.clone());
        let dashboards = Dashboards::new(remote, users.clone());

        tracing::info!(base_url = %config.api_base_url, "Forum client ready");

        Ok(Self {
            posts,
            comments,
            users,
            tags,
            announcements,
            payments,
            moderation,
            dashboards,
            session,
            config: Arc::new(config),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// One page of the public post feed, using the configured page size.
    pub async fn browse_posts(&self, page: u32, sort: PostSort) -> Result<Page<Post>, ApiError> {
        self.posts.list(page, self.config.page_size, sort).await
    }

    /// One page of posts matching a tag search.
    pub async fn search_posts(&self, query: &str, page: u32) -> Result<Page<Post>, ApiError> {
        self.posts
            .search(query, page, self.config.page_size)
            .await
    }

    /// Open the detail view for a post: fetch it and wrap the cached copy in
    /// a vote reconciler.
    pub async fn open_post(&self, id: &str) -> Result<VoteReconciler, ApiError> {
        let post = self.posts.get(id).await?;
        Ok(VoteReconciler::new(post))
    }

    /// Create a post as the signed-in user, after the ban and quota gates.
    pub async fn create_post(
        &self,
        title: &str,
        description: &str,
        tag: &str,
    ) -> Result<Post, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".to_string()));
        }
        if tag.trim().is_empty() {
            return Err(ApiError::Validation("Tag is required".to_string()));
        }

        let snapshot = self.session.snapshot()?;
        let viewer = self.users.get(&snapshot.email).await?;
        moderation::ensure_not_banned(&viewer)?;

        let post_count = self.posts.count_by_author(&viewer.email).await?;
        moderation::ensure_post_quota(&viewer, post_count)?;

        self.posts
            .create(&CreatePostRequest {
                author_name: snapshot.display_name,
                author_email: snapshot.email,
                author_image: snapshot.photo_url,
                title: title.to_string(),
                description: description.to_string(),
                tag: tag.to_string(),
            })
            .await
    }

    /// Add a comment to a post as the signed-in user, after the ban gate.
    pub async fn add_comment(&self, post_id: &str, text: &str) -> Result<Comment, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::Validation("Comment text is required".to_string()));
        }

        let snapshot = self.session.snapshot()?;
        let viewer = self.users.get(&snapshot.email).await?;
        moderation::ensure_not_banned(&viewer)?;

        self.comments
            .create(
                post_id,
                &viewer.email,
                &CreateCommentRequest {
                    user_id: viewer.id,
                    user_name: viewer.name,
                    text: text.to_string(),
                },
            )
            .await
    }

    /// Cast a vote through the reconciler as the signed-in user, after the
    /// ban gate. The gate runs before the optimistic update so a banned
    /// account never sees its vote applied locally.
    pub async fn cast_vote(
        &self,
        reconciler: &mut VoteReconciler,
        vote: VoteType,
    ) -> Result<VoteAction, ApiError> {
        let snapshot = self.session.snapshot()?;
        let viewer = self.users.get(&snapshot.email).await?;
        moderation::ensure_not_banned(&viewer)?;

        reconciler.vote(&self.posts, &viewer.email, vote).await
    }

    /// Start the gold membership upgrade: a confirmable payment intent for
    /// the fixed membership price.
    pub async fn begin_membership_upgrade(&self) -> Result<PaymentIntent, ApiError> {
        let snapshot = self.session.snapshot()?;
        self.payments
            .create_intent(
                GOLD_MEMBERSHIP_USD,
                PaymentCustomer {
                    name: snapshot.display_name,
                    email: snapshot.email,
                },
            )
            .await
    }

    /// Finish the upgrade after the payment provider confirmed the intent.
    /// A failed confirmation never reaches the upgrade route.
    pub async fn complete_membership_upgrade(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<(), ApiError> {
        if confirmation.status != PaymentStatus::Succeeded {
            return Err(ApiError::Payment(
                "Payment was not confirmed; membership unchanged".to_string(),
            ));
        }

        let snapshot = self.session.snapshot()?;
        self.users.upgrade(&snapshot.email).await?;
        tracing::info!(email = %snapshot.email, "Membership upgraded to gold");
        Ok(())
    }

    /// The dashboard for the signed-in account, resolved by role once.
    pub async fn dashboard(&self) -> Result<DashboardView, ApiError> {
        let snapshot = self.session.snapshot()?;
        self.dashboards.resolve(&snapshot.email).await
    }
}

/// Initialize the tracing subscriber. Call once at the composition root.
pub fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
