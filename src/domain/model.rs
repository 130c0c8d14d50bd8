use crate::domain::schema::{
    ActivityCategory, ActivityTag, AnatomyPart, BoundaryToken, DisclosureTopic, Domain, ItemRef,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Raw survey answer token as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<f64> for RawAnswer {
    fn from(value: f64) -> Self {
        RawAnswer::Number(value)
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

impl fmt::Display for RawAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAnswer::Number(n) => write!(f, "{}", n),
            RawAnswer::Text(s) => write!(f, "{:?}", s),
            RawAnswer::List(items) => write!(f, "{:?}", items),
        }
    }
}

/// Flat mapping of question id to raw answer.
pub type SurveyAnswers = HashMap<String, RawAnswer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    OutOfRange,
    NotANumber,
    UnrecognizedChoice,
    UnknownBoundary,
    UnknownAnatomy,
}

impl IssueKind {
    fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::OutOfRange => "out of range",
            IssueKind::NotANumber => "not a number",
            IssueKind::UnrecognizedChoice => "unrecognized choice",
            IssueKind::UnknownBoundary => "unknown boundary token",
            IssueKind::UnknownAnatomy => "unknown anatomy token",
        }
    }
}

/// One malformed answer found while normalizing a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerIssue {
    pub question_id: String,
    pub kind: IssueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl AnswerIssue {
    pub fn new(question_id: &str, kind: IssueKind, raw: Option<&RawAnswer>) -> Self {
        Self {
            question_id: question_id.to_string(),
            kind,
            raw: raw.map(|r| r.to_string()),
        }
    }
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{}: {} ({})", self.question_id, self.kind.as_str(), raw),
            None => write!(f, "{}: {}", self.question_id, self.kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArousalBand {
    Low,
    ModerateLow,
    ModerateHigh,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArousalFactor {
    pub score: f64,
    pub band: ArousalBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArousalProfile {
    pub excitation: ArousalFactor,
    pub inhibition_performance: ArousalFactor,
    pub inhibition_consequence: ArousalFactor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerRole {
    Top,
    Bottom,
    Switch,
    Undefined,
}

impl PowerRole {
    pub fn is_one_sided(&self) -> bool {
        matches!(self, PowerRole::Top | PowerRole::Bottom)
    }
}

impl fmt::Display for PowerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PowerRole::Top => "Top",
            PowerRole::Bottom => "Bottom",
            PowerRole::Switch => "Switch",
            PowerRole::Undefined => "Undefined",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerProfile {
    pub role: PowerRole,
    pub top_score: f64,
    pub bottom_score: f64,
    pub confidence: f64,
    pub confidence_band: ConfidenceBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScores {
    pub sensation: f64,
    pub connection: f64,
    pub power: f64,
    pub exploration: f64,
    pub verbal: f64,
}

impl DomainScores {
    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Sensation => self.sensation,
            Domain::Connection => self.connection,
            Domain::Power => self.power,
            Domain::Exploration => self.exploration,
            Domain::Verbal => self.verbal,
        }
    }

    pub fn set(&mut self, domain: Domain, value: f64) {
        match domain {
            Domain::Sensation => self.sensation = value,
            Domain::Connection => self.connection = value,
            Domain::Power => self.power = value,
            Domain::Exploration => self.exploration = value,
            Domain::Verbal => self.verbal = value,
        }
    }
}

impl Default for DomainScores {
    fn default() -> Self {
        Self {
            sensation: 50.0,
            connection: 50.0,
            power: 50.0,
            exploration: 50.0,
            verbal: 50.0,
        }
    }
}

/// Category → item key → interest (0, 0.5 or 1).
pub type ActivityTable = BTreeMap<ActivityCategory, BTreeMap<String, f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureProfile {
    pub topics: BTreeMap<DisclosureTopic, f64>,
    pub openness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    pub hard_limits: BTreeSet<BoundaryToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Boundaries {
    pub fn has_limit(&self, token: BoundaryToken) -> bool {
        self.hard_limits.contains(&token)
    }
}

/// Anatomy a respondent has (D1) and likes in partners (D2).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anatomy {
    #[serde(rename = "anatomy_self", default)]
    pub own: BTreeSet<AnatomyPart>,
    #[serde(rename = "anatomy_preference", default)]
    pub preference: BTreeSet<AnatomyPart>,
}

/// Derived, immutable view of one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub schema_version: String,
    pub arousal: ArousalProfile,
    pub power: PowerProfile,
    pub domain_scores: DomainScores,
    pub activities: ActivityTable,
    pub disclosure: DisclosureProfile,
    pub boundaries: Boundaries,
    #[serde(default)]
    pub anatomy: Anatomy,
    #[serde(default)]
    pub tags: BTreeMap<ActivityTag, bool>,
}

impl Profile {
    pub fn activity(&self, category: ActivityCategory, key: &str) -> Option<f64> {
        self.activities
            .get(&category)
            .and_then(|items| items.get(key))
            .copied()
    }

    /// Interest in one item; items missing from the table read as 0.
    pub fn interest(&self, item: &ItemRef) -> f64 {
        self.activity(item.category, item.key).unwrap_or(0.0)
    }

    pub fn topic(&self, topic: DisclosureTopic) -> Option<f64> {
        self.disclosure.topics.get(&topic).copied()
    }
}

/// Profile together with the issues found in its answers.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub profile: Profile,
    pub issues: Vec<AnswerIssue>,
}

impl Derivation {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSide {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConflict {
    /// Side that declared the limit.
    pub side: PlayerSide,
    pub user_id: String,
    pub boundary: BoundaryToken,
    pub category: ActivityCategory,
    /// First item of the other side that crosses the limit.
    pub activity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    Challenging,
    Lower,
    Moderate,
    High,
    Exceptional,
}

impl fmt::Display for CompatibilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompatibilityBand::Exceptional => "Exceptional compatibility",
            CompatibilityBand::High => "High compatibility",
            CompatibilityBand::Moderate => "Moderate compatibility",
            CompatibilityBand::Lower => "Lower compatibility",
            CompatibilityBand::Challenging => "Challenging compatibility",
        };
        f.write_str(label)
    }
}

/// Sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub power_complement: u8,
    pub domain_similarity: u8,
    pub activity_overlap: u8,
    pub disclosure_overlap: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthOpportunity {
    pub category: ActivityCategory,
    pub activity: String,
    /// Side that answered yes; the other answered maybe.
    pub eager: PlayerSide,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInsights {
    pub mutual_activities: BTreeMap<ActivityCategory, Vec<String>>,
    pub growth_opportunities: Vec<GrowthOpportunity>,
    pub mutual_disclosure: Vec<DisclosureTopic>,
    pub blocked_boundaries: BTreeSet<BoundaryToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub compatibility_version: String,
    pub players: [String; 2],
    pub overall_score: u8,
    pub interpretation: CompatibilityBand,
    pub breakdown: ScoreBreakdown,
    pub boundary_conflicts: Vec<BoundaryConflict>,
    pub insights: CompatibilityInsights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_answer_untagged() {
        let answers: SurveyAnswers = serde_json::from_str(
            r#"{"A1": 7, "B1a": "Y", "C1": ["breath_play", "watersports"]}"#,
        )
        .unwrap();
        assert_eq!(answers["A1"], RawAnswer::Number(7.0));
        assert_eq!(answers["B1a"], RawAnswer::Text("Y".to_string()));
        assert!(matches!(answers["C1"], RawAnswer::List(ref v) if v.len() == 2));
    }

    #[test]
    fn test_answer_issue_display() {
        let issue = AnswerIssue::new("A3", IssueKind::OutOfRange, Some(&RawAnswer::Number(9.0)));
        assert_eq!(issue.to_string(), "A3: out of range (9)");

        let missing = AnswerIssue::new("A4", IssueKind::Missing, None);
        assert_eq!(missing.to_string(), "A4: missing");
    }

    #[test]
    fn test_category_keys_serialize_snake_case() {
        let mut table = ActivityTable::new();
        table
            .entry(ActivityCategory::PhysicalTouch)
            .or_default()
            .insert("massage_give".to_string(), 1.0);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["physical_touch"]["massage_give"], 1.0);
    }

    #[test]
    fn test_band_ordering() {
        assert!(CompatibilityBand::Exceptional > CompatibilityBand::High);
        assert!(ArousalBand::High > ArousalBand::ModerateHigh);
        assert!(PowerRole::Top.is_one_sided());
        assert!(!PowerRole::Switch.is_one_sided());
    }
}
