use crate::catalog::{Industry, Region, SolutionPlay};
use crate::error::{BoardError, Result};
use crate::tier::{classify, SkillTier};
use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// SolutionPlayData
// ---------------------------------------------------------------------------

/// Per-play metrics exactly as stored. Every field may be absent; readers go
/// through [`SolutionPlayData::normalized`] rather than touching these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionPlayData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_completed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_delivered: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_sales_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles_posted: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<i64>,
}

/// Read-side view of [`SolutionPlayData`]: missing fields are 0 and negative
/// values are clamped to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMetrics {
    pub training_completed: u64,
    pub hours_delivered: u64,
    pub pre_sales_hours: u64,
    pub articles_posted: u64,
    pub certifications: u64,
}

fn non_negative(value: Option<i64>) -> u64 {
    value.map(|v| v.max(0) as u64).unwrap_or(0)
}

impl SolutionPlayData {
    pub fn normalized(&self) -> PlayMetrics {
        PlayMetrics {
            training_completed: non_negative(self.training_completed),
            hours_delivered: non_negative(self.hours_delivered),
            pre_sales_hours: non_negative(self.pre_sales_hours),
            articles_posted: non_negative(self.articles_posted),
            certifications: non_negative(self.certifications),
        }
    }
}

impl PlayMetrics {
    pub fn tier(&self) -> SkillTier {
        classify(self.hours_delivered)
    }
}

impl From<PlayMetrics> for SolutionPlayData {
    fn from(m: PlayMetrics) -> Self {
        let field = |v: u64| Some(i64::try_from(v).unwrap_or(i64::MAX));
        Self {
            training_completed: field(m.training_completed),
            hours_delivered: field(m.hours_delivered),
            pre_sales_hours: field(m.pre_sales_hours),
            articles_posted: field(m.articles_posted),
            certifications: field(m.certifications),
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient tag fields
// ---------------------------------------------------------------------------

/// A stored tag value: a name we may recognise, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Text(String),
    Other(IgnoredAny),
}

impl RawTag {
    fn parse<T: FromStr>(self) -> Option<T> {
        match self {
            RawTag::Text(s) => s.parse().ok(),
            RawTag::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<RawTag>),
    Other(IgnoredAny),
}

fn lenient_tag<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(Option::<RawTag>::deserialize(deserializer)?.and_then(RawTag::parse))
}

fn lenient_tags<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        Some(RawTags::List(tags)) => Some(tags.into_iter().filter_map(RawTag::parse).collect()),
        Some(RawTags::Other(_)) | None => None,
    })
}

// ---------------------------------------------------------------------------
// Consultant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Tags outside the catalog are dropped on read, so facets never match
    /// them and one odd record cannot fail the whole collection.
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub industries: Option<Vec<Industry>>,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_industry: Option<Industry>,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<Region>,
    /// Keyed by canonical play name. Keys outside the catalog are kept as-is.
    #[serde(default)]
    pub solution_plays: BTreeMap<String, SolutionPlayData>,
}

impl Consultant {
    /// A new record with a fresh id and no play data.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            industries: None,
            primary_industry: None,
            region: None,
            solution_plays: BTreeMap::new(),
        }
    }

    /// Normalized metrics for `play`; all zero when the play has no entry.
    pub fn metrics(&self, play: SolutionPlay) -> PlayMetrics {
        self.solution_plays
            .get(play.as_str())
            .map(SolutionPlayData::normalized)
            .unwrap_or_default()
    }

    pub fn hours(&self, play: SolutionPlay) -> u64 {
        self.metrics(play).hours_delivered
    }

    pub fn tier(&self, play: SolutionPlay) -> SkillTier {
        classify(self.hours(play))
    }

    /// Normalized metrics of every entry present in the map, catalog or not.
    pub fn entries(&self) -> impl Iterator<Item = (&str, PlayMetrics)> + '_ {
        self.solution_plays
            .iter()
            .map(|(key, data)| (key.as_str(), data.normalized()))
    }

    /// Industry tags, empty when the field is absent.
    pub fn industry_tags(&self) -> &[Industry] {
        self.industries.as_deref().unwrap_or(&[])
    }

    pub fn set_play(&mut self, play: SolutionPlay, data: SolutionPlayData) {
        self.solution_plays.insert(play.as_str().to_string(), data);
    }

    /// Up to two uppercase initials, used when there is no avatar.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

// ---------------------------------------------------------------------------
// Contact validation
// ---------------------------------------------------------------------------

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Check the fields a consultant form requires before a record is saved.
pub fn validate_contact(name: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BoardError::InvalidContact("name is required".into()));
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(BoardError::InvalidContact("email is required".into()));
    }
    if !email_re().is_match(email) {
        return Err(BoardError::InvalidContact(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
