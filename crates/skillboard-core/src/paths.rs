use crate::error::{BoardError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BOARD_DIR: &str = ".skillboard";

pub const CONFIG_FILE: &str = ".skillboard/config.yaml";
pub const CONSULTANTS_FILE: &str = ".skillboard/consultants.json";
pub const SUBMISSIONS_FILE: &str = ".skillboard/submissions.yaml";

/// Per-user identity file, relative to the home directory.
pub const USER_IDENTITY_FILE: &str = ".skillboard/user.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn board_dir(root: &Path) -> PathBuf {
    root.join(BOARD_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn consultants_path(root: &Path) -> PathBuf {
    root.join(CONSULTANTS_FILE)
}

pub fn submissions_path(root: &Path) -> PathBuf {
    root.join(SUBMISSIONS_FILE)
}

pub fn user_identity_path() -> Result<PathBuf> {
    let home = home::home_dir()
        .ok_or_else(|| BoardError::IdentityUnavailable("home directory not found".into()))?;
    Ok(home.join(USER_IDENTITY_FILE))
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Kebab-case form of a catalog name: "Cloud & AI Platforms" becomes "cloud-ai-platforms".
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
