//! Session context for the signed-in user.
//!
//! The identity provider owns sign-in and token issuance; this module holds
//! the resulting identity as an explicit handle created at the composition
//! root and threaded into the components that need it. Each request reads an
//! immutable snapshot, so no component observes identity state mid-change.

use std::sync::{Arc, RwLock};

use crate::errors::ApiError;

/// Read-only view of the signed-in identity taken once per request.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    /// Opaque bearer credential attached to outgoing requests
    pub access_token: String,
}

/// Shared session handle.
///
/// Cloning is cheap and every clone observes termination: once the remote
/// store rejects the credential, all holders see the session as ended.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionSnapshot>>>,
}

impl Session {
    /// A session for an already signed-in user.
    pub fn signed_in(snapshot: SessionSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(snapshot))),
        }
    }

    /// Take a read-only snapshot for one request.
    pub fn snapshot(&self) -> Result<SessionSnapshot, ApiError> {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().ok_or_else(|| {
            ApiError::Unauthorized("Session has been terminated".to_string())
        })
    }

    pub fn is_terminated(&self) -> bool {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.is_none()
    }

    /// End the session. Idempotent; called by the transport when the remote
    /// store rejects the credential, or by the UI on explicit sign-out.
    pub fn terminate(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.take().is_some() {
            tracing::warn!("Session terminated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            email: "alice@example.com".to_string(),
            display_name: "Alice".to_string(),
            photo_url: None,
            access_token: "token-1".to_string(),
        }
    }

    #[test]
    fn test_snapshot_reads_identity() {
        let session = Session::signed_in(snapshot());
        let snap = session.snapshot().unwrap();
        assert_eq!(snap.email, "alice@example.com");
        assert!(!session.is_terminated());
    }

    #[test]
    fn test_termination_is_idempotent_and_shared() {
        let session = Session::signed_in(snapshot());
        let other = session.clone();

        session.terminate();
        session.terminate();

        assert!(other.is_terminated());
        assert!(other.snapshot().is_err());
    }
}
