use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest hours count classified as [`SkillTier::Contributor`].
pub const CONTRIBUTOR_FROM_HOURS: u64 = 200;
/// Lowest hours count classified as [`SkillTier::Leader`].
pub const LEADER_FROM_HOURS: u64 = 500;

// ---------------------------------------------------------------------------
// SkillTier
// ---------------------------------------------------------------------------

/// Skill tier for one consultant on one solution play. Variants are declared
/// in rank order, so `Ord` compares by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillTier {
    #[serde(rename = "Not Started")]
    NotStarted,
    Apprentice,
    Contributor,
    Leader,
}

impl SkillTier {
    /// Tiers a consultant can actually hold on a play, highest first.
    pub fn qualified() -> &'static [SkillTier] {
        &[SkillTier::Leader, SkillTier::Contributor, SkillTier::Apprentice]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTier::NotStarted => "Not Started",
            SkillTier::Apprentice => "Apprentice",
            SkillTier::Contributor => "Contributor",
            SkillTier::Leader => "Leader",
        }
    }

    /// Hours band shown next to the tier on dashboards.
    pub fn hours_band(self) -> &'static str {
        match self {
            SkillTier::NotStarted => "0 hours delivered",
            SkillTier::Apprentice => "<200 hours delivered",
            SkillTier::Contributor => "200-500 hours delivered",
            SkillTier::Leader => "500+ hours delivered",
        }
    }

    pub fn is_started(self) -> bool {
        self != SkillTier::NotStarted
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify hours delivered on a single play. Lower bounds are inclusive.
pub fn classify(hours_delivered: u64) -> SkillTier {
    match hours_delivered {
        0 => SkillTier::NotStarted,
        h if h < CONTRIBUTOR_FROM_HOURS => SkillTier::Apprentice,
        h if h < LEADER_FROM_HOURS => SkillTier::Contributor,
        _ => SkillTier::Leader,
    }
}

// ---------------------------------------------------------------------------
// TierCounts
// ---------------------------------------------------------------------------

/// Number of consultants per qualified tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub leader: usize,
    pub contributor: usize,
    pub apprentice: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: SkillTier) {
        match tier {
            SkillTier::Leader => self.leader += 1,
            SkillTier::Contributor => self.contributor += 1,
            SkillTier::Apprentice => self.apprentice += 1,
            SkillTier::NotStarted => {}
        }
    }

    pub fn get(&self, tier: SkillTier) -> usize {
        match tier {
            SkillTier::Leader => self.leader,
            SkillTier::Contributor => self.contributor,
            SkillTier::Apprentice => self.apprentice,
            SkillTier::NotStarted => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.leader + self.contributor + self.apprentice
    }
}

impl FromIterator<SkillTier> for TierCounts {
    fn from_iter<I: IntoIterator<Item = SkillTier>>(iter: I) -> Self {
        let mut counts = TierCounts::default();
        for tier in iter {
            counts.record(tier);
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
