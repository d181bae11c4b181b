//! User session domain model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The currently logged-in user, stored under [`SESSION_KEY`]
///
/// Only `email` is required. Fields written by other login flows are kept
/// in `extra` so reading and rewriting a session never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Store key holding the serialized current session
pub const SESSION_KEY: &str = "loggedInUser";

impl UserSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            logged_in_at: Some(Utc::now()),
            extra: BTreeMap::new(),
        }
    }

    /// Parse a stored session value
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// A session with an empty email can't scope any data
    pub fn is_usable(&self) -> bool {
        !self.email.is_empty()
    }
}
