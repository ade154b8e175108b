//! Fixed catalogs: solution plays, solution areas, industries and regions.
//!
//! Every enum serializes to its display name (the exact string stored in
//! `consultants.json`) and parses from either that name, compared
//! case-insensitively, or its kebab-case slug.

use crate::error::BoardError;
use crate::paths::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn matches_name(candidate: &str, name: &str) -> bool {
    let candidate = candidate.trim();
    candidate.eq_ignore_ascii_case(name) || candidate.eq_ignore_ascii_case(&slugify(name))
}

// ---------------------------------------------------------------------------
// SolutionPlay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolutionPlay {
    #[serde(rename = "Migrate and Modernize your Estate")]
    MigrateAndModernize,
    #[serde(rename = "Innovate with Azure")]
    InnovateWithAzure,
    #[serde(rename = "AI Apps and Agents")]
    AiAppsAndAgents,
    #[serde(rename = "Secure AI Productivity")]
    SecureAiProductivity,
    #[serde(rename = "Unify Your Data Platform")]
    UnifyDataPlatform,
    #[serde(rename = "Modern SecOps with Unified Platform")]
    ModernSecOps,
    #[serde(rename = "Data Security")]
    DataSecurity,
    #[serde(rename = "Protect Cloud AI Platform and Apps")]
    ProtectCloudAi,
    #[serde(rename = "Copilot and Agents at Work")]
    CopilotAndAgentsAtWork,
    #[serde(rename = "Converged Communications")]
    ConvergedCommunications,
    #[serde(rename = "Scale with Cloud and AI Endpoints")]
    ScaleWithCloudEndpoints,
    #[serde(rename = "AI Ready with Surface Copilot PCs")]
    SurfaceCopilotPcs,
    #[serde(rename = "Innovate with Low Code AI and Agents")]
    LowCodeAiAndAgents,
    #[serde(rename = "Sales Transformation with AI")]
    SalesTransformation,
    #[serde(rename = "Service Transformation with AI")]
    ServiceTransformation,
    #[serde(rename = "ERP Transformation with AI")]
    ErpTransformation,
    #[serde(rename = "Scale Business Operations with AI")]
    ScaleBusinessOperations,
}

impl SolutionPlay {
    /// All 17 plays in catalog order. Views iterate in this order.
    pub fn all() -> &'static [SolutionPlay] {
        &[
            SolutionPlay::MigrateAndModernize,
            SolutionPlay::InnovateWithAzure,
            SolutionPlay::AiAppsAndAgents,
            SolutionPlay::SecureAiProductivity,
            SolutionPlay::UnifyDataPlatform,
            SolutionPlay::ModernSecOps,
            SolutionPlay::DataSecurity,
            SolutionPlay::ProtectCloudAi,
            SolutionPlay::CopilotAndAgentsAtWork,
            SolutionPlay::ConvergedCommunications,
            SolutionPlay::ScaleWithCloudEndpoints,
            SolutionPlay::SurfaceCopilotPcs,
            SolutionPlay::LowCodeAiAndAgents,
            SolutionPlay::SalesTransformation,
            SolutionPlay::ServiceTransformation,
            SolutionPlay::ErpTransformation,
            SolutionPlay::ScaleBusinessOperations,
        ]
    }

    /// Canonical name; also the key used in a consultant's `solutionPlays` map.
    pub fn as_str(self) -> &'static str {
        match self {
            SolutionPlay::MigrateAndModernize => "Migrate and Modernize your Estate",
            SolutionPlay::InnovateWithAzure => "Innovate with Azure",
            SolutionPlay::AiAppsAndAgents => "AI Apps and Agents",
            SolutionPlay::SecureAiProductivity => "Secure AI Productivity",
            SolutionPlay::UnifyDataPlatform => "Unify Your Data Platform",
            SolutionPlay::ModernSecOps => "Modern SecOps with Unified Platform",
            SolutionPlay::DataSecurity => "Data Security",
            SolutionPlay::ProtectCloudAi => "Protect Cloud AI Platform and Apps",
            SolutionPlay::CopilotAndAgentsAtWork => "Copilot and Agents at Work",
            SolutionPlay::ConvergedCommunications => "Converged Communications",
            SolutionPlay::ScaleWithCloudEndpoints => "Scale with Cloud and AI Endpoints",
            SolutionPlay::SurfaceCopilotPcs => "AI Ready with Surface Copilot PCs",
            SolutionPlay::LowCodeAiAndAgents => "Innovate with Low Code AI and Agents",
            SolutionPlay::SalesTransformation => "Sales Transformation with AI",
            SolutionPlay::ServiceTransformation => "Service Transformation with AI",
            SolutionPlay::ErpTransformation => "ERP Transformation with AI",
            SolutionPlay::ScaleBusinessOperations => "Scale Business Operations with AI",
        }
    }

    pub fn slug(self) -> String {
        slugify(self.as_str())
    }

    /// The solution area whose table lists this play.
    pub fn area(self) -> SolutionArea {
        SolutionArea::all()
            .iter()
            .copied()
            .find(|area| area.plays().contains(&self))
            .unwrap_or(SolutionArea::AiBusinessSolutions)
    }
}

impl fmt::Display for SolutionPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionPlay {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolutionPlay::all()
            .iter()
            .copied()
            .find(|p| matches_name(s, p.as_str()))
            .ok_or_else(|| BoardError::UnknownSolutionPlay(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SolutionArea
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolutionArea {
    #[serde(rename = "AI Business Solutions")]
    AiBusinessSolutions,
    #[serde(rename = "Cloud & AI Platforms")]
    CloudAndAiPlatforms,
    #[serde(rename = "Security")]
    Security,
}

/// Area to plays correspondence. Each play appears under exactly one area.
static AREA_PLAYS: &[(SolutionArea, &[SolutionPlay])] = &[
    (
        SolutionArea::AiBusinessSolutions,
        &[
            SolutionPlay::CopilotAndAgentsAtWork,
            SolutionPlay::ConvergedCommunications,
            SolutionPlay::ScaleWithCloudEndpoints,
            SolutionPlay::SurfaceCopilotPcs,
            SolutionPlay::LowCodeAiAndAgents,
            SolutionPlay::SalesTransformation,
            SolutionPlay::ServiceTransformation,
            SolutionPlay::ErpTransformation,
            SolutionPlay::ScaleBusinessOperations,
        ],
    ),
    (
        SolutionArea::CloudAndAiPlatforms,
        &[
            SolutionPlay::MigrateAndModernize,
            SolutionPlay::InnovateWithAzure,
            SolutionPlay::AiAppsAndAgents,
            SolutionPlay::UnifyDataPlatform,
        ],
    ),
    (
        SolutionArea::Security,
        &[
            SolutionPlay::SecureAiProductivity,
            SolutionPlay::ModernSecOps,
            SolutionPlay::DataSecurity,
            SolutionPlay::ProtectCloudAi,
        ],
    ),
];

impl SolutionArea {
    pub fn all() -> &'static [SolutionArea] {
        &[
            SolutionArea::AiBusinessSolutions,
            SolutionArea::CloudAndAiPlatforms,
            SolutionArea::Security,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolutionArea::AiBusinessSolutions => "AI Business Solutions",
            SolutionArea::CloudAndAiPlatforms => "Cloud & AI Platforms",
            SolutionArea::Security => "Security",
        }
    }

    pub fn slug(self) -> String {
        slugify(self.as_str())
    }

    pub fn plays(self) -> &'static [SolutionPlay] {
        AREA_PLAYS
            .iter()
            .find(|(area, _)| *area == self)
            .map(|(_, plays)| *plays)
            .unwrap_or(&[])
    }
}

impl fmt::Display for SolutionArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionArea {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolutionArea::all()
            .iter()
            .copied()
            .find(|a| matches_name(s, a.as_str()))
            .ok_or_else(|| BoardError::UnknownSolutionArea(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Industry {
    Banking,
    Manufacturing,
    Retail,
    Insurance,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Government,
    Healthcare,
    Education,
    Defense,
}

impl Industry {
    pub fn all() -> &'static [Industry] {
        &[
            Industry::Banking,
            Industry::Manufacturing,
            Industry::Retail,
            Industry::Insurance,
            Industry::ProfessionalServices,
            Industry::Government,
            Industry::Healthcare,
            Industry::Education,
            Industry::Defense,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Banking => "Banking",
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
            Industry::Insurance => "Insurance",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Government => "Government",
            Industry::Healthcare => "Healthcare",
            Industry::Education => "Education",
            Industry::Defense => "Defense",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::all()
            .iter()
            .copied()
            .find(|i| matches_name(s, i.as_str()))
            .ok_or_else(|| BoardError::UnknownIndustry(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Americas,
    #[serde(rename = "EMEA")]
    Emea,
    Asia,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[Region::Americas, Region::Emea, Region::Asia]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Emea => "EMEA",
            Region::Asia => "Asia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .copied()
            .find(|r| matches_name(s, r.as_str()))
            .ok_or_else(|| BoardError::UnknownRegion(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes() {
        assert_eq!(SolutionPlay::all().len(), 17);
        assert_eq!(SolutionArea::all().len(), 3);
        assert_eq!(Industry::all().len(), 9);
        assert_eq!(Region::all().len(), 3);
    }

    #[test]
    fn every_play_belongs_to_exactly_one_area() {
        for &play in SolutionPlay::all() {
            let owners = SolutionArea::all()
                .iter()
                .filter(|a| a.plays().contains(&play))
                .count();
            assert_eq!(owners, 1, "{play} should be in exactly one area");
        }
        let listed: usize = SolutionArea::all().iter().map(|a| a.plays().len()).sum();
        assert_eq!(listed, 17);
    }

    #[test]
    fn play_area_lookup() {
        assert_eq!(
            SolutionPlay::InnovateWithAzure.area(),
            SolutionArea::CloudAndAiPlatforms
        );
        assert_eq!(SolutionPlay::DataSecurity.area(), SolutionArea::Security);
        assert_eq!(
            SolutionPlay::ErpTransformation.area(),
            SolutionArea::AiBusinessSolutions
        );
    }

    #[test]
    fn play_names_are_unique() {
        let names: HashSet<&str> = SolutionPlay::all().iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&SolutionPlay::InnovateWithAzure).unwrap();
        assert_eq!(json, "\"Innovate with Azure\"");
        let json = serde_json::to_string(&Industry::ProfessionalServices).unwrap();
        assert_eq!(json, "\"Professional Services\"");
        let json = serde_json::to_string(&Region::Emea).unwrap();
        assert_eq!(json, "\"EMEA\"");
        let json = serde_json::to_string(&SolutionArea::CloudAndAiPlatforms).unwrap();
        assert_eq!(json, "\"Cloud & AI Platforms\"");
    }

    #[test]
    fn serde_matches_as_str_for_every_play() {
        for &play in SolutionPlay::all() {
            let json = serde_json::to_string(&play).unwrap();
            assert_eq!(json, format!("\"{}\"", play.as_str()));
            let parsed: SolutionPlay = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, play);
        }
    }

    #[test]
    fn parse_accepts_name_and_slug() {
        assert_eq!(
            "innovate with azure".parse::<SolutionPlay>().unwrap(),
            SolutionPlay::InnovateWithAzure
        );
        assert_eq!(
            "innovate-with-azure".parse::<SolutionPlay>().unwrap(),
            SolutionPlay::InnovateWithAzure
        );
        assert_eq!(
            "cloud-ai-platforms".parse::<SolutionArea>().unwrap(),
            SolutionArea::CloudAndAiPlatforms
        );
        assert_eq!("emea".parse::<Region>().unwrap(), Region::Emea);
        assert_eq!(
            "professional-services".parse::<Industry>().unwrap(),
            Industry::ProfessionalServices
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "Quantum Stuff".parse::<SolutionPlay>(),
            Err(BoardError::UnknownSolutionPlay(_))
        ));
        assert!(matches!(
            "Antarctica".parse::<Region>(),
            Err(BoardError::UnknownRegion(_))
        ));
        assert!(matches!(
            "Farming".parse::<Industry>(),
            Err(BoardError::UnknownIndustry(_))
        ));
        assert!(matches!(
            "Gaming".parse::<SolutionArea>(),
            Err(BoardError::UnknownSolutionArea(_))
        ));
    }
}
