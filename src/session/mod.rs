// SPDX-License-Identifier: MPL-2.0
//! Session state: the authenticated identity and token for the current user.
//!
//! The [`Store`] holds the in-memory session and mirrors it to two persisted
//! entries (token and user record) in the application data directory. Token
//! and user are always set or cleared together; there is no partial session
//! state.
//!
//! Restore failures are recovered silently by starting logged out - a stale
//! or corrupted entry is never surfaced to the user.

pub mod storage;

use crate::api::{Profile, SessionGrant};
use std::path::PathBuf;

/// An authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

/// Owns the current session and its persistence.
///
/// The store is constructed once at startup and passed explicitly to the
/// components that need it; it is a configuration error for a dependent
/// screen to run without one.
#[derive(Debug, Default)]
pub struct Store {
    session: Option<Session>,
    /// Base directory override for persistence (tests and portable installs).
    base_dir: Option<PathBuf>,
}

impl Store {
    /// Restores the session from persisted storage at the default location.
    ///
    /// If either entry is missing or the user record fails to decode, the
    /// store starts logged out. Never raises.
    #[must_use]
    pub fn restore() -> Self {
        Self::restore_from(None)
    }

    /// Restores the session from a custom base directory.
    #[must_use]
    pub fn restore_from(base_dir: Option<PathBuf>) -> Self {
        let session = match (
            storage::load_token(base_dir.clone()),
            storage::load_user(base_dir.clone()),
        ) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        };

        Self { session, base_dir }
    }

    /// Read-only projection of the signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The current session token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session from a successful credential exchange.
    ///
    /// Updates in-memory state and writes both persisted entries. Returns a
    /// warning key when persistence failed: the in-memory session stands for
    /// this run but will not survive a restart (no cross-key transaction is
    /// guaranteed by the underlying storage).
    pub fn open(&mut self, grant: SessionGrant) -> Option<String> {
        let session = Session {
            token: grant.token,
            user: grant.user,
        };
        let warning = storage::store(&session.token, &session.user, self.base_dir.clone());
        self.session = Some(session);
        warning
    }

    /// Closes the session: clears in-memory state and removes both persisted
    /// entries. Must not fail, even when nothing is stored.
    pub fn close(&mut self) {
        self.session = None;
        storage::clear(self.base_dir.clone());
    }
}
