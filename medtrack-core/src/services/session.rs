//! Session service and guard
//!
//! The session is whatever value sits under [`SESSION_KEY`]. Logging in
//! writes it, logging out removes it, and the guard only looks at it.
//! Credentials are never verified.

use std::sync::Arc;

use serde::Serialize;

use crate::config::SessionPolicy;
use crate::domain::result::{Error, Result};
use crate::domain::{UserSession, SESSION_KEY};
use crate::ports::KeyValueStore;

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Access {
    /// A session is present. Carries the raw stored value.
    Authorized { raw: String },
    Unauthorized,
}

impl Access {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Access::Authorized { .. })
    }
}

/// Decides whether a protected view may render
pub struct SessionGuard {
    store: Arc<dyn KeyValueStore>,
    policy: SessionPolicy,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn KeyValueStore>, policy: SessionPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }

    /// Check the stored session against the configured policy
    pub fn check(&self) -> Result<Access> {
        let raw = match self.store.get_item(SESSION_KEY)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Access::Unauthorized),
        };

        if self.policy == SessionPolicy::Strict {
            match UserSession::parse(&raw) {
                Ok(session) if session.is_usable() => {}
                Ok(_) => {
                    tracing::warn!("Stored session has an empty email, treating as logged out");
                    return Ok(Access::Unauthorized);
                }
                Err(e) => {
                    tracing::warn!("Stored session is malformed, treating as logged out: {}", e);
                    return Ok(Access::Unauthorized);
                }
            }
        }

        Ok(Access::Authorized { raw })
    }

    /// Like [`check`](Self::check), but turns a missing session into [`Error::Unauthorized`]
    pub fn require(&self) -> Result<()> {
        match self.check()? {
            Access::Authorized { .. } => Ok(()),
            Access::Unauthorized => Err(Error::Unauthorized),
        }
    }
}

/// Creates, reads and destroys the current session
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Start a session for `email`, replacing any current one
    pub fn login(&self, email: &str) -> Result<UserSession> {
        if email.is_empty() {
            return Err(Error::validation("Email is required."));
        }

        let session = UserSession::new(email);
        let raw = serde_json::to_string(&session)?;
        self.store.set_item(SESSION_KEY, &raw)?;
        tracing::debug!("Logged in");
        Ok(session)
    }

    /// End the current session. Logging out twice is fine.
    pub fn logout(&self) -> Result<()> {
        self.store.remove_item(SESSION_KEY)
    }

    /// The parsed current session
    ///
    /// Absent, empty and malformed values all read as `None`; a malformed
    /// value is logged as a warning.
    pub fn current(&self) -> Result<Option<UserSession>> {
        let raw = match self.store.get_item(SESSION_KEY)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        match UserSession::parse(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Ignoring malformed session value: {}", e);
                Ok(None)
            }
        }
    }

    /// Email of a usable current session, or [`Error::Unauthorized`]
    pub fn require_email(&self) -> Result<String> {
        match self.current()? {
            Some(session) if session.is_usable() => Ok(session.email),
            _ => Err(Error::Unauthorized),
        }
    }
}
