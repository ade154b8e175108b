//! Per-consultant and collection-wide aggregates behind the overview, card
//! list and per-play analytics views.

use crate::catalog::SolutionPlay;
use crate::consultant::{Consultant, PlayMetrics};
use crate::tier::{SkillTier, TierCounts};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Per-consultant totals
// ---------------------------------------------------------------------------

/// Sums over the entries present in a consultant's `solutionPlays` map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsultantTotals {
    pub hours: u64,
    pub training: u64,
    pub pre_sales: u64,
    pub articles: u64,
    pub certifications: u64,
}

impl ConsultantTotals {
    fn add(&mut self, m: &PlayMetrics) {
        self.hours = self.hours.saturating_add(m.hours_delivered);
        self.training = self.training.saturating_add(m.training_completed);
        self.pre_sales = self.pre_sales.saturating_add(m.pre_sales_hours);
        self.articles = self.articles.saturating_add(m.articles_posted);
        self.certifications = self.certifications.saturating_add(m.certifications);
    }
}

/// Sum that stops at `u64::MAX` instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}

pub fn totals(consultant: &Consultant) -> ConsultantTotals {
    let mut t = ConsultantTotals::default();
    for (_, m) in consultant.entries() {
        t.add(&m);
    }
    t
}

pub fn total_hours(consultant: &Consultant) -> u64 {
    saturating_sum(consultant.entries().map(|(_, m)| m.hours_delivered))
}

pub fn total_training(consultant: &Consultant) -> u64 {
    saturating_sum(consultant.entries().map(|(_, m)| m.training_completed))
}

pub fn total_pre_sales(consultant: &Consultant) -> u64 {
    saturating_sum(consultant.entries().map(|(_, m)| m.pre_sales_hours))
}

pub fn total_articles(consultant: &Consultant) -> u64 {
    saturating_sum(consultant.entries().map(|(_, m)| m.articles_posted))
}

pub fn total_certifications(consultant: &Consultant) -> u64 {
    saturating_sum(consultant.entries().map(|(_, m)| m.certifications))
}

/// Catalog plays the consultant has started, in catalog order.
pub fn active_plays(consultant: &Consultant) -> Vec<(SolutionPlay, SkillTier)> {
    SolutionPlay::all()
        .iter()
        .map(|&play| (play, consultant.tier(play)))
        .filter(|(_, tier)| tier.is_started())
        .collect()
}

pub fn active_play_count(consultant: &Consultant) -> usize {
    SolutionPlay::all()
        .iter()
        .filter(|&&play| consultant.tier(play).is_started())
        .count()
}

/// True when any present entry is at Leader tier.
pub fn leads_any_play(consultant: &Consultant) -> bool {
    consultant
        .entries()
        .any(|(_, m)| m.tier() == SkillTier::Leader)
}

// ---------------------------------------------------------------------------
// Card summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PlayBadge {
    pub play: SolutionPlay,
    pub tier: SkillTier,
}

/// What a consultant card shows: total hours, the first `limit` active plays
/// and how many more are hidden.
#[derive(Debug, Clone, Serialize)]
pub struct CardSummary {
    pub initials: String,
    pub total_hours: u64,
    pub active_play_count: usize,
    pub badges: Vec<PlayBadge>,
    pub more: usize,
}

pub fn card_summary(consultant: &Consultant, limit: usize) -> CardSummary {
    let active = active_plays(consultant);
    let count = active.len();
    let badges: Vec<PlayBadge> = active
        .into_iter()
        .take(limit)
        .map(|(play, tier)| PlayBadge { play, tier })
        .collect();
    CardSummary {
        initials: consultant.initials(),
        total_hours: total_hours(consultant),
        active_play_count: count,
        more: count - badges.len(),
        badges,
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_consultants: usize,
    pub total_hours: u64,
    pub total_training: u64,
    pub total_pre_sales: u64,
    pub total_articles: u64,
    pub total_certifications: u64,
    pub leader_count: usize,
}

pub fn overview(consultants: &[Consultant]) -> Overview {
    let mut sums = ConsultantTotals::default();
    let mut leader_count = 0;
    for c in consultants {
        for (_, m) in c.entries() {
            sums.add(&m);
        }
        if leads_any_play(c) {
            leader_count += 1;
        }
    }
    Overview {
        total_consultants: consultants.len(),
        total_hours: sums.hours,
        total_training: sums.training,
        total_pre_sales: sums.pre_sales,
        total_articles: sums.articles,
        total_certifications: sums.certifications,
        leader_count,
    }
}

// ---------------------------------------------------------------------------
// Per-play analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct QualifiedConsultant<'a> {
    pub consultant: &'a Consultant,
    pub metrics: PlayMetrics,
    pub tier: SkillTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayAnalytics<'a> {
    pub play: SolutionPlay,
    /// Consultants who have started the play, most hours first.
    pub qualified: Vec<QualifiedConsultant<'a>>,
    pub distribution: TierCounts,
    pub total_hours: u64,
    pub total_training: u64,
}

impl PlayAnalytics<'_> {
    pub fn qualified_count(&self) -> usize {
        self.qualified.len()
    }
}

/// Consultants whose tier on `play` is above NotStarted, stably sorted by
/// descending hours so ties keep input order.
pub fn qualified_for(consultants: &[Consultant], play: SolutionPlay) -> Vec<QualifiedConsultant<'_>> {
    let mut qualified: Vec<QualifiedConsultant<'_>> = consultants
        .iter()
        .map(|c| {
            let metrics = c.metrics(play);
            QualifiedConsultant {
                consultant: c,
                metrics,
                tier: metrics.tier(),
            }
        })
        .filter(|q| q.tier.is_started())
        .collect();
    qualified.sort_by(|a, b| b.metrics.hours_delivered.cmp(&a.metrics.hours_delivered));
    qualified
}

pub fn analyze_play(consultants: &[Consultant], play: SolutionPlay) -> PlayAnalytics<'_> {
    let qualified = qualified_for(consultants, play);
    let distribution = qualified.iter().map(|q| q.tier).collect();
    let total_hours = saturating_sum(qualified.iter().map(|q| q.metrics.hours_delivered));
    let total_training = saturating_sum(qualified.iter().map(|q| q.metrics.training_completed));
    PlayAnalytics {
        play,
        qualified,
        distribution,
        total_hours,
        total_training,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
