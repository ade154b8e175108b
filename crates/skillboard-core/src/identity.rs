//! Who is looking at the board. Read-only, display only: a failed lookup
//! means "no user banner", never an error for the caller.

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::io::{self, Format};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub email_address: String,
}

pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Result<Identity>;
}

/// Swallow lookup failures into `None`.
pub fn current_user_or_none(provider: &dyn IdentityProvider) -> Option<Identity> {
    provider.current_user().ok()
}

// ---------------------------------------------------------------------------
// ConfiguredIdentity
// ---------------------------------------------------------------------------

/// Looks in the board config's `identity` section, then in the per-user
/// `~/.skillboard/user.yaml`.
#[derive(Debug, Clone)]
pub struct ConfiguredIdentity {
    root: PathBuf,
    user_file: Option<PathBuf>,
}

impl ConfiguredIdentity {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            user_file: paths::user_identity_path().ok(),
        }
    }

    pub fn with_user_file(root: &Path, user_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.to_path_buf(),
            user_file: Some(user_file.into()),
        }
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user(&self) -> Result<Identity> {
        if let Ok(config) = Config::load(&self.root) {
            if let Some(identity) = config.identity {
                return Ok(identity);
            }
        }
        let path = self
            .user_file
            .as_deref()
            .ok_or_else(|| BoardError::IdentityUnavailable("no user file location".into()))?;
        io::load(path, Format::Yaml)?.ok_or_else(|| {
            BoardError::IdentityUnavailable(format!("{} not found", path.display()))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
