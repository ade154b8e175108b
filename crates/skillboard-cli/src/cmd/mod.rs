pub mod analytics;
pub mod capabilities;
pub mod catalog;
pub mod config;
pub mod consultant;
pub mod init;
pub mod matrix;
pub mod overview;
pub mod submission;
pub mod ui;

use anyhow::Context;
use skillboard_core::catalog::SolutionPlay;
use skillboard_core::config::Config;
use std::path::Path;

/// Resolve `--play`, falling back to the configured default play.
pub(crate) fn resolve_play(root: &Path, play: Option<&str>) -> anyhow::Result<SolutionPlay> {
    match play {
        Some(p) => Ok(p.parse::<SolutionPlay>()?),
        None => Ok(Config::load_or_default(root)
            .context("failed to load config")?
            .default_play),
    }
}
