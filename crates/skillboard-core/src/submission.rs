//! Hours submissions: self-reported delivery hours for one play, captured
//! from team members and kept as a log for resource managers to review.
//!
//! Layout:
//!   .skillboard/submissions.yaml   id counter plus submissions, oldest first
//!
//! IDs are sequential (S1, S2, S3, …) and never reissued, even after the
//! newest entry is deleted.

use crate::catalog::{SolutionArea, SolutionPlay};
use crate::error::{BoardError, Result};
use crate::tier::SkillTier;
use crate::io::{self, Format};
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// HoursRange
// ---------------------------------------------------------------------------

/// Self-reported hours band offered on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoursRange {
    #[serde(rename = "0-100")]
    UpTo100,
    #[serde(rename = "101-500")]
    From101To500,
    #[serde(rename = "501+")]
    Over500,
}

impl HoursRange {
    pub fn all() -> &'static [HoursRange] {
        &[HoursRange::UpTo100, HoursRange::From101To500, HoursRange::Over500]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HoursRange::UpTo100 => "0-100",
            HoursRange::From101To500 => "101-500",
            HoursRange::Over500 => "501+",
        }
    }

    /// Tier label the form shows beside the band.
    pub fn label_tier(self) -> SkillTier {
        match self {
            HoursRange::UpTo100 => SkillTier::Apprentice,
            HoursRange::From101To500 => SkillTier::Contributor,
            HoursRange::Over500 => SkillTier::Leader,
        }
    }

    pub fn contains(self, hours: u64) -> bool {
        match self {
            HoursRange::UpTo100 => hours <= 100,
            HoursRange::From101To500 => (101..=500).contains(&hours),
            HoursRange::Over500 => hours >= 501,
        }
    }
}

impl fmt::Display for HoursRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoursRange {
    type Err = BoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HoursRange::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| BoardError::UnknownHoursRange(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
    pub team_member: String,
    pub area: SolutionArea,
    pub play: SolutionPlay,
    pub range: HoursRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub team_member: String,
    pub area: SolutionArea,
    pub play: SolutionPlay,
    pub range: HoursRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn validate(&self) -> Result<()> {
        if self.team_member.trim().is_empty() {
            return Err(BoardError::InvalidContact("team member name is required".into()));
        }
        if !self.area.plays().contains(&self.play) {
            return Err(BoardError::PlayNotInArea {
                play: self.play.to_string(),
                area: self.area.to_string(),
            });
        }
        if let Some(hours) = self.actual_hours {
            if !self.range.contains(hours) {
                return Err(BoardError::HoursOutsideRange {
                    hours,
                    range: self.range.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SubmissionLog
// ---------------------------------------------------------------------------

/// On-disk shape. `last_id` is the highest number ever issued, so deleting
/// the newest entry never frees its id.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LogFile {
    #[serde(default)]
    last_id: u64,
    #[serde(default)]
    submissions: Vec<Submission>,
}

fn id_number(id: &str) -> Option<u64> {
    id.strip_prefix('S')?.parse().ok()
}

impl LogFile {
    fn high_water(&self) -> u64 {
        self.submissions
            .iter()
            .filter_map(|s| id_number(&s.id))
            .fold(self.last_id, u64::max)
    }

    fn issue_id(&mut self) -> String {
        self.last_id = self.high_water() + 1;
        format!("S{}", self.last_id)
    }
}

/// The submissions file of one board. Mutations hold an in-process lock
/// across their read-modify-write; share one log per board (e.g. behind an
/// `Arc`) so concurrent writers are serialized.
#[derive(Debug)]
pub struct SubmissionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionLog {
    pub fn open(root: &Path) -> Self {
        Self {
            path: paths::submissions_path(root),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(&self) -> Result<LogFile> {
        Ok(io::load(&self.path, Format::Yaml)?.unwrap_or_default())
    }

    fn store(&self, file: &LogFile) -> Result<()> {
        io::save(&self.path, Format::Yaml, file)
    }

    /// Validate and record a submission. Returns the stored entry.
    pub fn add(&self, new: NewSubmission) -> Result<Submission> {
        new.validate()?;
        let _guard = self.guard();
        let mut file = self.load()?;
        let submission = Submission {
            id: file.issue_id(),
            team_member: new.team_member.trim().to_string(),
            area: new.area,
            play: new.play,
            range: new.range,
            actual_hours: new.actual_hours,
            notes: new.notes.filter(|n| !n.trim().is_empty()),
            submitted_at: Utc::now(),
        };
        file.submissions.push(submission.clone());
        self.store(&file)?;
        Ok(submission)
    }

    /// All submissions, oldest first.
    pub fn list(&self) -> Result<Vec<Submission>> {
        Ok(self.load()?.submissions)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.guard();
        let mut file = self.load()?;
        let before = file.submissions.len();
        file.submissions.retain(|s| s.id != id);
        if file.submissions.len() == before {
            return Ok(false);
        }
        self.store(&file)?;
        Ok(true)
    }

    /// Drop every entry. The id counter is kept.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        let mut file = self.load()?;
        file.last_id = file.high_water();
        file.submissions.clear();
        self.store(&file)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
