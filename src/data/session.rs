use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::constants::{SESSION_TOKEN_PREFIX, SESSION_TOKEN_SUFFIX_LEN};

/// Capability that supplies the per-session analytics token.
///
/// The token only exists for the view-tracking collaborator, so it is
/// injected rather than read from ambient storage; where the caller persists
/// it (browser storage, config file, nowhere) is not this crate's concern.
pub trait SessionProvider {
    fn session_id(&self) -> String;
}

/// Freshly generated token in the `session_<millis>_<random>` form the
/// tracking endpoint expects. Generates once and hands out copies.
#[derive(Debug, Clone)]
pub struct GeneratedSession {
    token: String,
}

impl GeneratedSession {
    pub fn new() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_TOKEN_SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self {
            token: format!(
                "{}_{}_{}",
                SESSION_TOKEN_PREFIX,
                Utc::now().timestamp_millis(),
                suffix.to_lowercase()
            ),
        }
    }
}

impl Default for GeneratedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for GeneratedSession {
    fn session_id(&self) -> String {
        self.token.clone()
    }
}

/// Fixed token, for tests and replaying a persisted session.
#[derive(Debug, Clone)]
pub struct FixedSession {
    token: String,
}

impl FixedSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SessionProvider for FixedSession {
    fn session_id(&self) -> String {
        self.token.clone()
    }
}
