//! Role-resolved dashboard variants.
//!
//! The account role is looked up once and the result is a tagged variant
//! carrying exactly the data that dashboard renders, instead of role checks
//! scattered through view code.

use std::sync::Arc;

use crate::api::UsersApi;
use crate::errors::ApiError;
use crate::models::{AdminStats, Role, UserOverview};
use crate::remote::Remote;

/// The dashboard a signed-in account sees.
#[derive(Debug, Clone)]
pub enum DashboardView {
    Admin { stats: AdminStats },
    User { overview: UserOverview },
}

/// Client surface for the dashboard data routes.
#[derive(Clone)]
pub struct Dashboards {
    remote: Arc<Remote>,
    users: UsersApi,
}

impl Dashboards {
    pub(crate) fn new(remote: Arc<Remote>, users: UsersApi) -> Self {
        Self { remote, users }
    }

    /// GET /overview - Personal activity summary for one account.
    pub async fn overview(&self, email: &str) -> Result<UserOverview, ApiError> {
        self.remote
            .get_query("/overview", &[("email", email.to_string())])
            .await
    }

    /// GET /admin/stats - Site-wide totals for the admin dashboard.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.remote.get("/admin/stats").await
    }

    /// Resolve which dashboard an account gets and fetch its data.
    pub async fn resolve(&self, email: &str) -> Result<DashboardView, ApiError> {
        match self.users.role(email).await? {
            Role::Admin => Ok(DashboardView::Admin {
                stats: self.admin_stats().await?,
            }),
            Role::User => Ok(DashboardView::User {
                overview: self.overview(email).await?,
            }),
        }
    }
}
