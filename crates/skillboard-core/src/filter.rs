//! Free-text search and multi-facet filtering over a consultant collection.
//!
//! Every facet is a set; an empty set places no constraint. Facets and the
//! query are ANDed together and the input order is preserved.

use crate::catalog::{Industry, Region, SolutionArea, SolutionPlay};
use crate::consultant::Consultant;
use crate::coverage::active_in_area;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantFilter {
    /// Case-insensitive substring matched against name or email.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub industries: BTreeSet<Industry>,
    #[serde(default)]
    pub regions: BTreeSet<Region>,
    #[serde(default)]
    pub plays: BTreeSet<SolutionPlay>,
    #[serde(default)]
    pub areas: BTreeSet<SolutionArea>,
}

impl ConsultantFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn industries(mut self, industries: impl IntoIterator<Item = Industry>) -> Self {
        self.industries.extend(industries);
        self
    }

    pub fn regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions.extend(regions);
        self
    }

    pub fn plays(mut self, plays: impl IntoIterator<Item = SolutionPlay>) -> Self {
        self.plays.extend(plays);
        self
    }

    pub fn areas(mut self, areas: impl IntoIterator<Item = SolutionArea>) -> Self {
        self.areas.extend(areas);
        self
    }

    /// True when no query and no facet is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.industries.is_empty()
            && self.regions.is_empty()
            && self.plays.is_empty()
            && self.areas.is_empty()
    }

    pub fn matches(&self, consultant: &Consultant) -> bool {
        self.matches_query(consultant)
            && self.matches_industry(consultant)
            && self.matches_region(consultant)
            && self.matches_play(consultant)
            && self.matches_area(consultant)
    }

    /// Matching consultants, in input order.
    pub fn apply<'a>(&self, consultants: &'a [Consultant]) -> Vec<&'a Consultant> {
        consultants.iter().filter(|c| self.matches(c)).collect()
    }

    fn matches_query(&self, c: &Consultant) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle)
    }

    fn matches_industry(&self, c: &Consultant) -> bool {
        self.industries.is_empty()
            || c.industry_tags().iter().any(|i| self.industries.contains(i))
    }

    fn matches_region(&self, c: &Consultant) -> bool {
        self.regions.is_empty() || c.region.is_some_and(|r| self.regions.contains(&r))
    }

    fn matches_play(&self, c: &Consultant) -> bool {
        self.plays.is_empty() || self.plays.iter().any(|&p| c.hours(p) > 0)
    }

    fn matches_area(&self, c: &Consultant) -> bool {
        self.areas.is_empty() || self.areas.iter().any(|&a| active_in_area(c, a))
    }
}

/// Filter `consultants` by query and facets; empty facets match everything.
pub fn filter<'a>(
    consultants: &'a [Consultant],
    query: &str,
    industries: &BTreeSet<Industry>,
    regions: &BTreeSet<Region>,
    plays: &BTreeSet<SolutionPlay>,
    areas: &BTreeSet<SolutionArea>,
) -> Vec<&'a Consultant> {
    let f = ConsultantFilter {
        query: query.to_string(),
        industries: industries.clone(),
        regions: regions.clone(),
        plays: plays.clone(),
        areas: areas.clone(),
    };
    f.apply(consultants)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultant::SolutionPlayData;

    fn roster() -> Vec<Consultant> {
        let regions = [
            Region::Americas,
            Region::Emea,
            Region::Asia,
            Region::Americas,
            Region::Asia,
            Region::Emea,
            Region::Americas,
            Region::Asia,
            Region::Americas,
            Region::Asia,
        ];
        regions
            .iter()
            .enumerate()
            .map(|(i, &region)| {
                let mut c = Consultant::new(format!("Person {i}"), format!("p{i}@corp.example"));
                c.region = Some(region);
                c
            })
            .collect()
    }

    fn hours(c: &mut Consultant, play: SolutionPlay, h: i64) {
        c.set_play(
            play,
            SolutionPlayData {
                hours_delivered: Some(h),
                ..Default::default()
            },
        );
    }

    fn names(found: &[&Consultant]) -> Vec<String> {
        found.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let all = roster();
        let found = ConsultantFilter::new().apply(&all);
        assert_eq!(found.len(), 10);
        for (got, want) in found.iter().zip(all.iter()) {
            assert_eq!(got.id, want.id);
        }
        assert!(ConsultantFilter::new().is_empty());
    }

    #[test]
    fn region_facet_selects_members_only() {
        let all = roster();
        let found = ConsultantFilter::new().regions([Region::Emea]).apply(&all);
        assert_eq!(names(&found), vec!["Person 1", "Person 5"]);
    }

    #[test]
    fn region_facet_skips_consultants_without_region() {
        let mut all = roster();
        all[1].region = None;
        let found = ConsultantFilter::new().regions([Region::Emea]).apply(&all);
        assert_eq!(names(&found), vec!["Person 5"]);
    }

    #[test]
    fn query_is_case_insensitive_on_name_or_email() {
        let mut all = roster();
        all[3].name = "Grace Hopper".into();
        all[7].email = "GRACE.h@navy.example".into();
        let found = ConsultantFilter::new().query("grace").apply(&all);
        assert_eq!(names(&found), vec!["Grace Hopper", "Person 7"]);
    }

    #[test]
    fn industry_facet_intersects_tags() {
        let mut all = roster();
        all[0].industries = Some(vec![Industry::Banking, Industry::Retail]);
        all[2].industries = Some(vec![Industry::Healthcare]);
        all[4].primary_industry = Some(Industry::Retail);
        let found = ConsultantFilter::new()
            .industries([Industry::Retail, Industry::Defense])
            .apply(&all);
        assert_eq!(names(&found), vec!["Person 0"]);
    }

    #[test]
    fn play_facet_needs_hours_on_any_selected_play() {
        let mut all = roster();
        hours(&mut all[2], SolutionPlay::DataSecurity, 10);
        hours(&mut all[6], SolutionPlay::InnovateWithAzure, 0);
        hours(&mut all[8], SolutionPlay::InnovateWithAzure, 300);
        let found = ConsultantFilter::new()
            .plays([SolutionPlay::DataSecurity, SolutionPlay::InnovateWithAzure])
            .apply(&all);
        assert_eq!(names(&found), vec!["Person 2", "Person 8"]);
    }

    #[test]
    fn area_facet_uses_area_plays() {
        let mut all = roster();
        hours(&mut all[1], SolutionPlay::ModernSecOps, 5);
        hours(&mut all[4], SolutionPlay::InnovateWithAzure, 5);
        let found = ConsultantFilter::new()
            .areas([SolutionArea::Security])
            .apply(&all);
        assert_eq!(names(&found), vec!["Person 1"]);
        let found = ConsultantFilter::new()
            .areas([SolutionArea::Security, SolutionArea::CloudAndAiPlatforms])
            .apply(&all);
        assert_eq!(names(&found), vec!["Person 1", "Person 4"]);
    }

    #[test]
    fn facets_are_anded() {
        let mut all = roster();
        hours(&mut all[1], SolutionPlay::DataSecurity, 5);
        hours(&mut all[2], SolutionPlay::DataSecurity, 5);
        let found = ConsultantFilter::new()
            .regions([Region::Emea])
            .plays([SolutionPlay::DataSecurity])
            .apply(&all);
        assert_eq!(names(&found), vec!["Person 1"]);
        let found = ConsultantFilter::new()
            .regions([Region::Emea])
            .plays([SolutionPlay::DataSecurity])
            .query("nobody")
            .apply(&all);
        assert!(found.is_empty());
    }

    #[test]
    fn free_function_matches_builder() {
        let all = roster();
        let regions: BTreeSet<Region> = [Region::Asia].into_iter().collect();
        let found = filter(
            &all,
            "",
            &BTreeSet::new(),
            &regions,
            &BTreeSet::new(),
            &BTreeSet::new(),
        );
        assert_eq!(found.len(), 4);
        assert_eq!(all.len(), 10);
    }
}
