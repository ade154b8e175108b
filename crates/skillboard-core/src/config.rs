use crate::catalog::SolutionPlay;
use crate::consultant::validate_contact;
use crate::error::{BoardError, Result};
use crate::identity::Identity;
use crate::io::{self, Format};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// BoardConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub board: BoardConfig,
    /// Play selected when the analytics view is opened without one.
    #[serde(default = "default_play")]
    pub default_play: SolutionPlay,
    /// Play badges shown on a consultant card before "+N more".
    #[serde(default = "default_card_preview_limit")]
    pub card_preview_limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

fn default_version() -> u32 {
    1
}

fn default_play() -> SolutionPlay {
    SolutionPlay::all()[0]
}

fn default_card_preview_limit() -> usize {
    5
}

impl Config {
    pub fn new(board_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            board: BoardConfig {
                name: board_name.into(),
                description: None,
            },
            default_play: default_play(),
            card_preview_limit: default_card_preview_limit(),
            identity: None,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        io::load(&paths::config_path(root), Format::Yaml)?.ok_or(BoardError::NotInitialized)
    }

    /// Load the config, or defaults named after the root directory when the
    /// board has not been initialized.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Ok(cfg) => Ok(cfg),
            Err(BoardError::NotInitialized) => {
                let name = root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "skillboard".to_string());
                Ok(Self::new(name))
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        io::save(&paths::config_path(root), Format::Yaml, self)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.board.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "board.name is empty".to_string(),
            });
        }

        if self.card_preview_limit == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "card_preview_limit is 0; cards will show no play badges".to_string(),
            });
        } else if self.card_preview_limit > SolutionPlay::all().len() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "card_preview_limit={} exceeds the {} catalog plays",
                    self.card_preview_limit,
                    SolutionPlay::all().len()
                ),
            });
        }

        if let Some(identity) = &self.identity {
            if let Err(e) = validate_contact(&identity.display_name, &identity.email_address) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("identity: {e}"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
