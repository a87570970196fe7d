//! User routes of the remote forum API.

use std::sync::Arc;

use super::Modified;
use crate::errors::ApiError;
use crate::models::{Role, RoleResponse, User};
use crate::remote::Remote;

/// Client surface for the user route family.
#[derive(Clone)]
pub struct UsersApi {
    remote: Arc<Remote>,
}

impl UsersApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// GET /get-user - The stored account record for an email.
    pub async fn get(&self, email: &str) -> Result<User, ApiError> {
        self.remote
            .get_query("/get-user", &[("email", email.to_string())])
            .await
    }

    /// GET /get-user-role - Just the role for an email.
    pub async fn role(&self, email: &str) -> Result<Role, ApiError> {
        let resp: RoleResponse = self
            .remote
            .get_query("/get-user-role", &[("email", email.to_string())])
            .await?;
        Ok(resp.role)
    }

    /// GET /users - Admin listing, filtered by a name search.
    pub async fn search(&self, query: &str) -> Result<Vec<User>, ApiError> {
        self.remote
            .get_query("/users", &[("search", query.to_string())])
            .await
    }

    /// PATCH /users/make-admin/:id - Promote an account to admin.
    pub async fn make_admin(&self, user_id: &str) -> Result<Modified, ApiError> {
        self.remote
            .patch(&format!("/users/make-admin/{}", user_id))
            .await
    }

    /// PATCH /users/ban/:id - Ban an account from all future writes.
    pub async fn ban(&self, user_id: &str) -> Result<Modified, ApiError> {
        self.remote.patch(&format!("/users/ban/{}", user_id)).await
    }

    /// PATCH /users/upgrade/:email - Upgrade an account to the gold tier.
    pub async fn upgrade(&self, email: &str) -> Result<Modified, ApiError> {
        self.remote
            .patch(&format!("/users/upgrade/{}", email))
            .await
    }
}
