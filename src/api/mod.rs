//! Typed client surfaces over the remote forum API.
//!
//! One surface per entity, mirroring the remote route families. All methods
//! suspend at the network boundary and return the central error taxonomy.

mod announcements;
mod comments;
mod payments;
mod posts;
mod tags;
mod users;

pub use announcements::*;
pub use comments::*;
pub use payments::*;
pub use posts::*;
pub use tags::*;
pub use users::*;

use serde::{Deserialize, Serialize};

/// Paginated listing envelope returned by the remote list routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Acknowledgement carrying the number of documents the remote store changed.
///
/// A zero count is the store's no-op signal (e.g. reporting a comment that is
/// already reported).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modified {
    pub modified_count: u64,
}

/// Acknowledgement carrying the number of documents the remote store deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub deleted_count: u64,
}

/// Bare count response used by the counting routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Count {
    pub count: i64,
}
