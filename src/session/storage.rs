// SPDX-License-Identifier: MPL-2.0
//! On-disk persistence for the session's two logical entries.
//!
//! The token is a plain-text file and the user profile a CBOR record, both in
//! the application data directory. The two writes are independent; there is
//! no cross-key transaction. Loading is forgiving: any missing or undecodable
//! entry simply yields `None`.
//!
//! # Path Resolution
//!
//! The storage location can be customized for testing or portable deployments:
//! 1. Pass an explicit base directory to the `_from`/`_to` functions
//! 2. Set `ICED_AGENDA_DATA_DIR` (or `--data-dir`)
//! 3. Falls back to the platform-specific data directory

use crate::api::Profile;
use crate::app::paths;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Token file name within the app data directory.
const TOKEN_FILE: &str = "session.token";

/// User record file name within the app data directory.
const USER_FILE: &str = "session-user.cbor";

fn entry_path(base_dir: Option<PathBuf>, file: &str) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(file);
        path
    })
}

/// Reads the persisted token, if present and readable.
pub fn load_token(base_dir: Option<PathBuf>) -> Option<String> {
    let path = entry_path(base_dir, TOKEN_FILE)?;
    let token = fs::read_to_string(path).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Reads the persisted user record, if present and decodable.
pub fn load_user(base_dir: Option<PathBuf>) -> Option<Profile> {
    let path = entry_path(base_dir, USER_FILE)?;
    let file = fs::File::open(path).ok()?;
    ciborium::from_reader(BufReader::new(file)).ok()
}

/// Writes both session entries.
///
/// Returns a warning key when either write fails so the caller can notify
/// the user that the session will not survive a restart. A partial write is
/// cleaned up to preserve the set-together/cleared-together invariant.
pub fn store(token: &str, user: &Profile, base_dir: Option<PathBuf>) -> Option<String> {
    let Some(dir) = paths::get_app_data_dir_with_override(base_dir) else {
        return Some("notification-session-persist-error".to_string());
    };

    if fs::create_dir_all(&dir).is_err() {
        return Some("notification-session-persist-error".to_string());
    }

    let token_path = dir.join(TOKEN_FILE);
    let user_path = dir.join(USER_FILE);

    if fs::write(&token_path, token).is_err() {
        return Some("notification-session-persist-error".to_string());
    }

    let written = fs::File::create(&user_path)
        .ok()
        .and_then(|file| ciborium::into_writer(user, BufWriter::new(file)).ok());

    if written.is_none() {
        // Do not leave a token without a user record behind
        let _ = fs::remove_file(&token_path);
        return Some("notification-session-persist-error".to_string());
    }

    None
}

/// Removes both session entries. Missing entries are not an error.
pub fn clear(base_dir: Option<PathBuf>) {
    if let Some(path) = entry_path(base_dir.clone(), TOKEN_FILE) {
        let _ = fs::remove_file(path);
    }
    if let Some(path) = entry_path(base_dir, USER_FILE) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn profile() -> Profile {
        Profile {
            id: "provider-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn store_then_load_round_trips_both_entries() {
        let dir = tempdir().expect("create temp dir");
        let base = Some(dir.path().to_path_buf());

        let warning = store("jwt-token", &profile(), base.clone());
        assert!(warning.is_none(), "store should succeed");

        assert_eq!(load_token(base.clone()), Some("jwt-token".to_string()));
        assert_eq!(load_user(base), Some(profile()));
    }

    #[test]
    fn load_from_empty_directory_yields_none() {
        let dir = tempdir().expect("create temp dir");
        let base = Some(dir.path().to_path_buf());

        assert!(load_token(base.clone()).is_none());
        assert!(load_user(base).is_none());
    }

    #[test]
    fn corrupted_user_record_yields_none() {
        let dir = tempdir().expect("create temp dir");
        let base = Some(dir.path().to_path_buf());

        fs::write(dir.path().join(USER_FILE), "not valid cbor data").expect("write file");

        assert!(load_user(base).is_none());
    }

    #[test]
    fn clear_removes_entries_and_tolerates_absence() {
        let dir = tempdir().expect("create temp dir");
        let base = Some(dir.path().to_path_buf());

        store("jwt-token", &profile(), base.clone());
        clear(base.clone());
        assert!(load_token(base.clone()).is_none());
        assert!(load_user(base.clone()).is_none());

        // Clearing again must not fail
        clear(base);
    }

    #[test]
    fn empty_token_file_is_treated_as_absent() {
        let dir = tempdir().expect("create temp dir");
        let base = Some(dir.path().to_path_buf());

        fs::write(dir.path().join(TOKEN_FILE), "  \n").expect("write file");
        assert!(load_token(base).is_none());
    }
}
