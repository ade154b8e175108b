//! Capabilities assessment: how much of the team has started each play, and
//! where the gaps are.

use crate::aggregate::{qualified_for, QualifiedConsultant};
use crate::catalog::{SolutionArea, SolutionPlay};
use crate::consultant::Consultant;
use crate::tier::{SkillTier, TierCounts};
use serde::Serialize;

/// Coverage at or above this percentage counts as [`CoverageStatus::Strong`].
pub const STRONG_COVERAGE_PCT: f64 = 50.0;

// ---------------------------------------------------------------------------
// CoverageStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Strong,
    Growing,
    Missing,
}

impl CoverageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverageStatus::Strong => "strong",
            CoverageStatus::Growing => "growing",
            CoverageStatus::Missing => "missing",
        }
    }

    fn of(total: usize, coverage: f64) -> Self {
        if total == 0 {
            CoverageStatus::Missing
        } else if coverage >= STRONG_COVERAGE_PCT {
            CoverageStatus::Strong
        } else {
            CoverageStatus::Growing
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// PlayCoverage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PlayCoverage {
    pub play: SolutionPlay,
    pub area: SolutionArea,
    pub tiers: TierCounts,
    /// Consultants with any tier above NotStarted.
    pub total: usize,
    pub coverage: f64,
    pub status: CoverageStatus,
}

pub fn play_coverage(consultants: &[Consultant], play: SolutionPlay) -> PlayCoverage {
    let tiers: TierCounts = consultants.iter().map(|c| c.tier(play)).collect();
    let total = tiers.total();
    let coverage = percentage(total, consultants.len());
    PlayCoverage {
        play,
        area: play.area(),
        tiers,
        total,
        coverage,
        status: CoverageStatus::of(total, coverage),
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AreaCoverage {
    pub area: SolutionArea,
    /// Consultants with hours on at least one play in the area.
    pub active_consultants: usize,
    pub coverage: f64,
    pub strong: usize,
    pub growing: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub consultant_count: usize,
    /// One entry per catalog play, in catalog order.
    pub plays: Vec<PlayCoverage>,
    pub areas: Vec<AreaCoverage>,
}

impl Assessment {
    pub fn with_status(&self, status: CoverageStatus) -> impl Iterator<Item = &PlayCoverage> {
        self.plays.iter().filter(move |p| p.status == status)
    }

    pub fn strong(&self) -> Vec<&PlayCoverage> {
        self.with_status(CoverageStatus::Strong).collect()
    }

    pub fn growing(&self) -> Vec<&PlayCoverage> {
        self.with_status(CoverageStatus::Growing).collect()
    }

    pub fn missing(&self) -> Vec<&PlayCoverage> {
        self.with_status(CoverageStatus::Missing).collect()
    }
}

/// True when the consultant has hours on any play mapped to `area`.
pub fn active_in_area(consultant: &Consultant, area: SolutionArea) -> bool {
    area.plays().iter().any(|&play| consultant.hours(play) > 0)
}

pub fn assess(consultants: &[Consultant]) -> Assessment {
    let plays: Vec<PlayCoverage> = SolutionPlay::all()
        .iter()
        .map(|&play| play_coverage(consultants, play))
        .collect();

    let areas = SolutionArea::all()
        .iter()
        .map(|&area| {
            let active = consultants
                .iter()
                .filter(|c| active_in_area(c, area))
                .count();
            let in_area = plays.iter().filter(|p| p.area == area);
            let count = |status| in_area.clone().filter(|p| p.status == status).count();
            AreaCoverage {
                area,
                active_consultants: active,
                coverage: percentage(active, consultants.len()),
                strong: count(CoverageStatus::Strong),
                growing: count(CoverageStatus::Growing),
                missing: count(CoverageStatus::Missing),
            }
        })
        .collect();

    Assessment {
        consultant_count: consultants.len(),
        plays,
        areas,
    }
}

// ---------------------------------------------------------------------------
// Deep dive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TierGroup<'a> {
    pub tier: SkillTier,
    pub members: Vec<QualifiedConsultant<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeepDive<'a> {
    pub coverage: PlayCoverage,
    /// Leader, Contributor, Apprentice; empty groups are left out.
    pub groups: Vec<TierGroup<'a>>,
}

pub fn deep_dive(consultants: &[Consultant], play: SolutionPlay) -> DeepDive<'_> {
    let qualified = qualified_for(consultants, play);
    let groups = SkillTier::qualified()
        .iter()
        .map(|&tier| TierGroup {
            tier,
            members: qualified.iter().filter(|q| q.tier == tier).cloned().collect(),
        })
        .filter(|g| !g.members.is_empty())
        .collect();
    DeepDive {
        coverage: play_coverage(consultants, play),
        groups,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultant::SolutionPlayData;

    fn consultant(name: &str, plays: &[(SolutionPlay, i64)]) -> Consultant {
        let mut c = Consultant::new(name, format!("{name}@example.com"));
        for &(play, hours) in plays {
            c.set_play(
                play,
                SolutionPlayData {
                    hours_delivered: Some(hours),
                    ..Default::default()
                },
            );
        }
        c
    }

    fn team(active_on_play: usize, total: usize, play: SolutionPlay) -> Vec<Consultant> {
        (0..total)
            .map(|i| {
                if i < active_on_play {
                    consultant(&format!("c{i}"), &[(play, 100)])
                } else {
                    consultant(&format!("c{i}"), &[])
                }
            })
            .collect()
    }

    #[test]
    fn no_qualifiers_is_missing() {
        let c = team(0, 5, SolutionPlay::DataSecurity);
        let cov = play_coverage(&c, SolutionPlay::DataSecurity);
        assert_eq!(cov.total, 0);
        assert_eq!(cov.coverage, 0.0);
        assert_eq!(cov.status, CoverageStatus::Missing);
    }

    #[test]
    fn three_of_five_is_strong() {
        let c = team(3, 5, SolutionPlay::DataSecurity);
        let cov = play_coverage(&c, SolutionPlay::DataSecurity);
        assert_eq!(cov.total, 3);
        assert!((cov.coverage - 60.0).abs() < f64::EPSILON);
        assert_eq!(cov.status, CoverageStatus::Strong);
    }

    #[test]
    fn exactly_half_is_strong_and_below_is_growing() {
        let half = team(2, 4, SolutionPlay::DataSecurity);
        assert_eq!(
            play_coverage(&half, SolutionPlay::DataSecurity).status,
            CoverageStatus::Strong
        );
        let some = team(1, 4, SolutionPlay::DataSecurity);
        let cov = play_coverage(&some, SolutionPlay::DataSecurity);
        assert_eq!(cov.status, CoverageStatus::Growing);
        assert!((cov.coverage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_team_does_not_divide_by_zero() {
        let cov = play_coverage(&[], SolutionPlay::DataSecurity);
        assert_eq!(cov.coverage, 0.0);
        assert!(cov.coverage.is_finite());
        assert_eq!(cov.status, CoverageStatus::Missing);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn assessment_partitions_all_plays() {
        let consultants = vec![
            consultant(
                "a",
                &[
                    (SolutionPlay::InnovateWithAzure, 600),
                    (SolutionPlay::DataSecurity, 20),
                ],
            ),
            consultant("b", &[(SolutionPlay::InnovateWithAzure, 250)]),
            consultant("c", &[]),
        ];
        let a = assess(&consultants);
        assert_eq!(a.plays.len(), 17);
        assert_eq!(a.strong().len(), 1);
        assert_eq!(a.growing().len(), 1);
        assert_eq!(a.missing().len(), 15);
        assert_eq!(a.strong()[0].play, SolutionPlay::InnovateWithAzure);
        assert_eq!(a.growing()[0].play, SolutionPlay::DataSecurity);
    }

    #[test]
    fn area_rollup() {
        let consultants = vec![
            consultant("a", &[(SolutionPlay::InnovateWithAzure, 600)]),
            consultant("b", &[(SolutionPlay::DataSecurity, 10)]),
        ];
        let a = assess(&consultants);
        let cloud = a
            .areas
            .iter()
            .find(|x| x.area == SolutionArea::CloudAndAiPlatforms)
            .unwrap();
        assert_eq!(cloud.active_consultants, 1);
        assert!((cloud.coverage - 50.0).abs() < f64::EPSILON);
        assert_eq!(cloud.strong, 1);
        assert_eq!(cloud.missing, 3);
        let business = a
            .areas
            .iter()
            .find(|x| x.area == SolutionArea::AiBusinessSolutions)
            .unwrap();
        assert_eq!(business.active_consultants, 0);
        assert_eq!(business.missing, 9);
    }

    #[test]
    fn active_in_area_uses_area_table() {
        let c = consultant("a", &[(SolutionPlay::ModernSecOps, 1)]);
        assert!(active_in_area(&c, SolutionArea::Security));
        assert!(!active_in_area(&c, SolutionArea::CloudAndAiPlatforms));
    }

    #[test]
    fn deep_dive_groups_by_tier_and_omits_empty() {
        let consultants = vec![
            consultant("apprentice", &[(SolutionPlay::DataSecurity, 50)]),
            consultant("leader", &[(SolutionPlay::DataSecurity, 800)]),
            consultant("none", &[]),
            consultant("leader2", &[(SolutionPlay::DataSecurity, 900)]),
        ];
        let d = deep_dive(&consultants, SolutionPlay::DataSecurity);
        let tiers: Vec<SkillTier> = d.groups.iter().map(|g| g.tier).collect();
        assert_eq!(tiers, vec![SkillTier::Leader, SkillTier::Apprentice]);
        let leaders: Vec<&str> = d.groups[0]
            .members
            .iter()
            .map(|q| q.consultant.name.as_str())
            .collect();
        assert_eq!(leaders, vec!["leader2", "leader"]);
        assert_eq!(d.coverage.total, 3);
    }
}
