//! Question and item schema for profile version 0.4.
//!
//! Every activity item is declared once, with its survey question, its
//! direction and (for directional items) the key of its counterpart. Scoring
//! code walks these tables; nothing inspects item-name suffixes at runtime.
//!
//! Direction convention: `Give` is the side a Top leads with. For touch,
//! oral, anal, power-exchange and verbal items that is the literal giver; for
//! display items it is the watcher, and the performer is the `Receive` side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version string stamped on every derived profile.
pub const PROFILE_SCHEMA_VERSION: &str = "0.4";

/// Answers at or above this value count as interest (yes or maybe).
pub const INTEREST_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    PhysicalTouch,
    Oral,
    Anal,
    PowerExchange,
    VerbalRoleplay,
    DisplayPerformance,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::PhysicalTouch,
        ActivityCategory::Oral,
        ActivityCategory::Anal,
        ActivityCategory::PowerExchange,
        ActivityCategory::VerbalRoleplay,
        ActivityCategory::DisplayPerformance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::PhysicalTouch => "physical_touch",
            ActivityCategory::Oral => "oral",
            ActivityCategory::Anal => "anal",
            ActivityCategory::PowerExchange => "power_exchange",
            ActivityCategory::VerbalRoleplay => "verbal_roleplay",
            ActivityCategory::DisplayPerformance => "display_performance",
        }
    }

    pub fn items(&self) -> &'static [ActivityItem] {
        match self {
            ActivityCategory::PhysicalTouch => PHYSICAL_TOUCH,
            ActivityCategory::Oral => ORAL,
            ActivityCategory::Anal => ANAL,
            ActivityCategory::PowerExchange => POWER_EXCHANGE,
            ActivityCategory::VerbalRoleplay => VERBAL_ROLEPLAY,
            ActivityCategory::DisplayPerformance => DISPLAY_PERFORMANCE,
        }
    }

    pub fn has_directional_items(&self) -> bool {
        self.items().iter().any(|item| item.direction != Direction::Neutral)
    }

    /// Directional pairs of this category as `(give, receive)`.
    pub fn directional_pairs(&self) -> impl Iterator<Item = DirectionalPair> {
        self.items().iter().filter_map(|item| match (item.direction, item.counterpart) {
            (Direction::Give, Some(receive)) => Some(DirectionalPair {
                give: item.key,
                receive,
            }),
            _ => None,
        })
    }

    pub fn neutral_items(&self) -> impl Iterator<Item = &'static ActivityItem> {
        self.items()
            .iter()
            .filter(|item| item.direction == Direction::Neutral)
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Give,
    Receive,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub key: &'static str,
    /// `None` for items the survey never asks; they tabulate as 0.
    pub question: Option<&'static str>,
    pub direction: Direction,
    pub counterpart: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalPair {
    pub give: &'static str,
    pub receive: &'static str,
}

const fn give(key: &'static str, question: &'static str, receive: &'static str) -> ActivityItem {
    ActivityItem {
        key,
        question: Some(question),
        direction: Direction::Give,
        counterpart: Some(receive),
    }
}

const fn receive(key: &'static str, question: &'static str, give: &'static str) -> ActivityItem {
    ActivityItem {
        key,
        question: Some(question),
        direction: Direction::Receive,
        counterpart: Some(give),
    }
}

const fn give_unasked(key: &'static str, receive: &'static str) -> ActivityItem {
    ActivityItem {
        key,
        question: None,
        direction: Direction::Give,
        counterpart: Some(receive),
    }
}

const fn neutral(key: &'static str, question: &'static str) -> ActivityItem {
    ActivityItem {
        key,
        question: Some(question),
        direction: Direction::Neutral,
        counterpart: None,
    }
}

// B1-B10: "a" 是接受方，"b" 是給予方
const PHYSICAL_TOUCH: &[ActivityItem] = &[
    receive("massage_receive", "B1a", "massage_give"),
    give("massage_give", "B1b", "massage_receive"),
    receive("hair_pull_gentle_receive", "B2a", "hair_pull_gentle_give"),
    give("hair_pull_gentle_give", "B2b", "hair_pull_gentle_receive"),
    receive("biting_moderate_receive", "B3a", "biting_moderate_give"),
    give("biting_moderate_give", "B3b", "biting_moderate_receive"),
    receive("spanking_moderate_receive", "B4a", "spanking_moderate_give"),
    give("spanking_moderate_give", "B4b", "spanking_moderate_receive"),
    receive("hands_genitals_receive", "B5a", "hands_genitals_give"),
    give("hands_genitals_give", "B5b", "hands_genitals_receive"),
    receive("spanking_hard_receive", "B6a", "spanking_hard_give"),
    give("spanking_hard_give", "B6b", "spanking_hard_receive"),
    receive("slapping_receive", "B7a", "slapping_give"),
    give("slapping_give", "B7b", "slapping_receive"),
    receive("choking_receive", "B8a", "choking_give"),
    give("choking_give", "B8b", "choking_receive"),
    receive("spitting_receive", "B9a", "spitting_give"),
    give("spitting_give", "B9b", "spitting_receive"),
    receive("watersports_receive", "B10a", "watersports_give"),
    give("watersports_give", "B10b", "watersports_receive"),
];

const ORAL: &[ActivityItem] = &[
    receive("oral_sex_receive", "B11a", "oral_sex_give"),
    give("oral_sex_give", "B11b", "oral_sex_receive"),
    receive("oral_body_receive", "B12a", "oral_body_give"),
    give("oral_body_give", "B12b", "oral_body_receive"),
];

const ANAL: &[ActivityItem] = &[
    receive("anal_fingers_toys_receive", "B13a", "anal_fingers_toys_give"),
    give("anal_fingers_toys_give", "B13b", "anal_fingers_toys_receive"),
    receive("rimming_receive", "B14a", "rimming_give"),
    give("rimming_give", "B14b", "rimming_receive"),
];

const POWER_EXCHANGE: &[ActivityItem] = &[
    receive("restraints_receive", "B15a", "restraints_give"),
    give("restraints_give", "B15b", "restraints_receive"),
    receive("blindfold_receive", "B16a", "blindfold_give"),
    give("blindfold_give", "B16b", "blindfold_receive"),
    receive("orgasm_control_receive", "B17a", "orgasm_control_give"),
    give("orgasm_control_give", "B17b", "orgasm_control_receive"),
    receive("protocols_receive", "B18a", "protocols_give"),
    give("protocols_give", "B18b", "protocols_receive"),
];

const VERBAL_ROLEPLAY: &[ActivityItem] = &[
    neutral("dirty_talk", "B19"),
    neutral("moaning", "B20"),
    neutral("roleplay", "B21"),
    receive("commands_receive", "B22a", "commands_give"),
    give("commands_give", "B22b", "commands_receive"),
    receive("begging_receive", "B23a", "begging_give"),
    give("begging_give", "B23b", "begging_receive"),
];

// 表演方是 Receive，觀看方是 Give
const DISPLAY_PERFORMANCE: &[ActivityItem] = &[
    receive("stripping_self", "B24a", "watching_strip"),
    give("watching_strip", "B24b", "stripping_self"),
    receive("solo_pleasure_self", "B25a", "watching_solo_pleasure"),
    give("watching_solo_pleasure", "B25b", "solo_pleasure_self"),
    receive("posing_self", "B26", "posing_watching"),
    give_unasked("posing_watching", "posing_self"),
    receive("dancing_self", "B27", "dancing_watching"),
    give_unasked("dancing_watching", "dancing_self"),
    receive("revealing_clothing_self", "B28", "revealing_clothing_watching"),
    give_unasked("revealing_clothing_watching", "revealing_clothing_self"),
];

/// Reference to one activity item inside its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRef {
    pub category: ActivityCategory,
    pub key: &'static str,
}

const fn item(category: ActivityCategory, key: &'static str) -> ItemRef {
    ItemRef { category, key }
}

use ActivityCategory::{
    Anal, DisplayPerformance, Oral, PhysicalTouch, PowerExchange, VerbalRoleplay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureTopic {
    PastExperiences,
    Fantasies,
    TurnOns,
    TurnOffs,
    Insecurities,
    Boundaries,
    FutureFantasies,
    FeelingDesired,
}

impl DisclosureTopic {
    pub const ALL: [DisclosureTopic; 8] = [
        DisclosureTopic::PastExperiences,
        DisclosureTopic::Fantasies,
        DisclosureTopic::TurnOns,
        DisclosureTopic::TurnOffs,
        DisclosureTopic::Insecurities,
        DisclosureTopic::Boundaries,
        DisclosureTopic::FutureFantasies,
        DisclosureTopic::FeelingDesired,
    ];

    pub fn question(&self) -> &'static str {
        match self {
            DisclosureTopic::PastExperiences => "B29",
            DisclosureTopic::Fantasies => "B30",
            DisclosureTopic::TurnOns => "B31",
            DisclosureTopic::TurnOffs => "B32",
            DisclosureTopic::Insecurities => "B33",
            DisclosureTopic::Boundaries => "B34",
            DisclosureTopic::FutureFantasies => "B35",
            DisclosureTopic::FeelingDesired => "B36",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Sensation,
    Connection,
    Power,
    Exploration,
    Verbal,
}

/// One contributor to a domain mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSource {
    Activity(ItemRef),
    Topic(DisclosureTopic),
}

const fn act(category: ActivityCategory, key: &'static str) -> DomainSource {
    DomainSource::Activity(item(category, key))
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Sensation,
        Domain::Connection,
        Domain::Power,
        Domain::Exploration,
        Domain::Verbal,
    ];

    pub fn sources(&self) -> &'static [DomainSource] {
        match self {
            Domain::Sensation => SENSATION_SOURCES,
            Domain::Connection => CONNECTION_SOURCES,
            Domain::Power => POWER_SOURCES,
            Domain::Exploration => EXPLORATION_SOURCES,
            Domain::Verbal => VERBAL_SOURCES,
        }
    }
}

const SENSATION_SOURCES: &[DomainSource] = &[
    act(PhysicalTouch, "biting_moderate_receive"),
    act(PhysicalTouch, "biting_moderate_give"),
    act(PhysicalTouch, "spanking_moderate_receive"),
    act(PhysicalTouch, "spanking_moderate_give"),
    act(PhysicalTouch, "spanking_hard_receive"),
    act(PhysicalTouch, "spanking_hard_give"),
    act(PhysicalTouch, "slapping_receive"),
    act(PhysicalTouch, "slapping_give"),
    act(PhysicalTouch, "choking_receive"),
    act(PhysicalTouch, "choking_give"),
    act(PhysicalTouch, "spitting_receive"),
    act(PhysicalTouch, "spitting_give"),
    act(PhysicalTouch, "watersports_receive"),
    act(PhysicalTouch, "watersports_give"),
];

const CONNECTION_SOURCES: &[DomainSource] = &[
    act(PhysicalTouch, "massage_receive"),
    act(PhysicalTouch, "massage_give"),
    act(Oral, "oral_body_receive"),
    act(Oral, "oral_body_give"),
    act(VerbalRoleplay, "moaning"),
    act(DisplayPerformance, "posing_self"),
    act(DisplayPerformance, "revealing_clothing_self"),
    DomainSource::Topic(DisclosureTopic::Fantasies),
    DomainSource::Topic(DisclosureTopic::Insecurities),
    DomainSource::Topic(DisclosureTopic::FutureFantasies),
    DomainSource::Topic(DisclosureTopic::FeelingDesired),
];

const POWER_SOURCES: &[DomainSource] = &[
    act(PowerExchange, "restraints_receive"),
    act(PowerExchange, "restraints_give"),
    act(PowerExchange, "blindfold_receive"),
    act(PowerExchange, "blindfold_give"),
    act(PowerExchange, "orgasm_control_receive"),
    act(PowerExchange, "orgasm_control_give"),
    act(PowerExchange, "protocols_receive"),
    act(PowerExchange, "protocols_give"),
    act(VerbalRoleplay, "commands_receive"),
    act(VerbalRoleplay, "commands_give"),
    act(VerbalRoleplay, "begging_receive"),
    act(VerbalRoleplay, "begging_give"),
];

const EXPLORATION_SOURCES: &[DomainSource] = &[
    act(VerbalRoleplay, "roleplay"),
    act(DisplayPerformance, "stripping_self"),
    act(DisplayPerformance, "watching_strip"),
    act(DisplayPerformance, "solo_pleasure_self"),
    act(DisplayPerformance, "watching_solo_pleasure"),
    act(DisplayPerformance, "dancing_self"),
    act(PhysicalTouch, "spitting_receive"),
    act(PhysicalTouch, "spitting_give"),
    act(PhysicalTouch, "watersports_receive"),
    act(PhysicalTouch, "watersports_give"),
];

const VERBAL_SOURCES: &[DomainSource] = &[
    act(VerbalRoleplay, "dirty_talk"),
    act(VerbalRoleplay, "moaning"),
    act(VerbalRoleplay, "roleplay"),
    act(VerbalRoleplay, "commands_receive"),
    act(VerbalRoleplay, "commands_give"),
    act(VerbalRoleplay, "begging_receive"),
    act(VerbalRoleplay, "begging_give"),
];

/// Hard-limit categories a respondent can declare (question C1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryToken {
    ImpactPlay,
    RestraintsBondage,
    BreathPlay,
    AnalActivities,
    DegradationHumiliation,
    Roleplay,
    Watersports,
    ToysProps,
    MultiPartner,
}

impl BoundaryToken {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "impact_play" => Some(BoundaryToken::ImpactPlay),
            "restraints_bondage" => Some(BoundaryToken::RestraintsBondage),
            "breath_play" => Some(BoundaryToken::BreathPlay),
            "anal_activities" => Some(BoundaryToken::AnalActivities),
            "degradation_humiliation" => Some(BoundaryToken::DegradationHumiliation),
            "roleplay" => Some(BoundaryToken::Roleplay),
            "watersports" => Some(BoundaryToken::Watersports),
            "toys_props" => Some(BoundaryToken::ToysProps),
            "multi_partner" => Some(BoundaryToken::MultiPartner),
            _ => None,
        }
    }

    /// Items whose interest by the other partner conflicts with this limit.
    ///
    /// `DegradationHumiliation` deliberately maps to nothing: begging is verbal
    /// power exchange, not degradation. `ToysProps` and `MultiPartner` have no
    /// tracked items.
    pub fn conflicting_items(&self) -> &'static [ItemRef] {
        match self {
            BoundaryToken::ImpactPlay => IMPACT_PLAY_ITEMS,
            BoundaryToken::RestraintsBondage => RESTRAINTS_ITEMS,
            BoundaryToken::BreathPlay => BREATH_PLAY_ITEMS,
            BoundaryToken::AnalActivities => ANAL_ITEMS,
            BoundaryToken::Roleplay => ROLEPLAY_ITEMS,
            BoundaryToken::Watersports => WATERSPORTS_ITEMS,
            BoundaryToken::DegradationHumiliation
            | BoundaryToken::ToysProps
            | BoundaryToken::MultiPartner => &[],
        }
    }
}

const IMPACT_PLAY_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "spanking_moderate_give"),
    item(PhysicalTouch, "spanking_moderate_receive"),
    item(PhysicalTouch, "spanking_hard_give"),
    item(PhysicalTouch, "spanking_hard_receive"),
    item(PhysicalTouch, "slapping_give"),
    item(PhysicalTouch, "slapping_receive"),
    item(PhysicalTouch, "biting_moderate_give"),
    item(PhysicalTouch, "biting_moderate_receive"),
];

const RESTRAINTS_ITEMS: &[ItemRef] = &[
    item(PowerExchange, "restraints_give"),
    item(PowerExchange, "restraints_receive"),
    item(PowerExchange, "blindfold_give"),
    item(PowerExchange, "blindfold_receive"),
];

const BREATH_PLAY_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "choking_give"),
    item(PhysicalTouch, "choking_receive"),
];

const ANAL_ITEMS: &[ItemRef] = &[
    item(Anal, "anal_fingers_toys_give"),
    item(Anal, "anal_fingers_toys_receive"),
    item(Anal, "rimming_give"),
    item(Anal, "rimming_receive"),
];

const ROLEPLAY_ITEMS: &[ItemRef] = &[
    item(VerbalRoleplay, "roleplay"),
    item(PowerExchange, "protocols_receive"),
    item(PowerExchange, "protocols_give"),
];

const WATERSPORTS_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "watersports_give"),
    item(PhysicalTouch, "watersports_receive"),
];

/// Boolean gating tags consumed by content generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTag {
    OpenToGentle,
    OpenToModerate,
    OpenToIntense,
    OpenToOral,
    OpenToAnal,
    OpenToRestraints,
    OpenToOrgasmControl,
    OpenToRoleplay,
    OpenToDisplay,
    OpenToGroup,
}

impl ActivityTag {
    pub const ALL: [ActivityTag; 10] = [
        ActivityTag::OpenToGentle,
        ActivityTag::OpenToModerate,
        ActivityTag::OpenToIntense,
        ActivityTag::OpenToOral,
        ActivityTag::OpenToAnal,
        ActivityTag::OpenToRestraints,
        ActivityTag::OpenToOrgasmControl,
        ActivityTag::OpenToRoleplay,
        ActivityTag::OpenToDisplay,
        ActivityTag::OpenToGroup,
    ];

    /// Items OR-ed together for this tag. `OpenToGroup` is driven by
    /// boundaries instead and has no items.
    pub fn contributing_items(&self) -> &'static [ItemRef] {
        match self {
            ActivityTag::OpenToGentle => GENTLE_ITEMS,
            ActivityTag::OpenToModerate => MODERATE_ITEMS,
            ActivityTag::OpenToIntense => INTENSE_ITEMS,
            ActivityTag::OpenToOral => ORAL_ITEMS,
            ActivityTag::OpenToAnal => ANAL_ITEMS,
            ActivityTag::OpenToRestraints => RESTRAINTS_ITEMS,
            ActivityTag::OpenToOrgasmControl => ORGASM_CONTROL_ITEMS,
            ActivityTag::OpenToRoleplay => ROLEPLAY_ITEMS,
            ActivityTag::OpenToDisplay => DISPLAY_ITEMS,
            ActivityTag::OpenToGroup => &[],
        }
    }
}

const GENTLE_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "massage_receive"),
    item(PhysicalTouch, "massage_give"),
    item(PhysicalTouch, "hair_pull_gentle_receive"),
    item(PhysicalTouch, "hair_pull_gentle_give"),
];

const MODERATE_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "biting_moderate_receive"),
    item(PhysicalTouch, "biting_moderate_give"),
    item(PhysicalTouch, "spanking_moderate_receive"),
    item(PhysicalTouch, "spanking_moderate_give"),
    item(PhysicalTouch, "hands_genitals_receive"),
    item(PhysicalTouch, "hands_genitals_give"),
];

const INTENSE_ITEMS: &[ItemRef] = &[
    item(PhysicalTouch, "spanking_hard_receive"),
    item(PhysicalTouch, "spanking_hard_give"),
    item(PhysicalTouch, "slapping_receive"),
    item(PhysicalTouch, "slapping_give"),
    item(PhysicalTouch, "choking_receive"),
    item(PhysicalTouch, "choking_give"),
    item(PhysicalTouch, "spitting_receive"),
    item(PhysicalTouch, "spitting_give"),
    item(PhysicalTouch, "watersports_receive"),
    item(PhysicalTouch, "watersports_give"),
];

const ORAL_ITEMS: &[ItemRef] = &[
    item(Oral, "oral_sex_receive"),
    item(Oral, "oral_sex_give"),
    item(Oral, "oral_body_receive"),
    item(Oral, "oral_body_give"),
];

const ORGASM_CONTROL_ITEMS: &[ItemRef] = &[
    item(PowerExchange, "orgasm_control_receive"),
    item(PowerExchange, "orgasm_control_give"),
];

const DISPLAY_ITEMS: &[ItemRef] = &[
    item(DisplayPerformance, "stripping_self"),
    item(DisplayPerformance, "watching_strip"),
    item(DisplayPerformance, "solo_pleasure_self"),
    item(DisplayPerformance, "watching_solo_pleasure"),
    item(DisplayPerformance, "posing_self"),
    item(DisplayPerformance, "dancing_self"),
];

/// Arousal questions, three groups of four: excitation, performance
/// inhibition, consequence inhibition.
pub const AROUSAL_QUESTIONS: [[&str; 4]; 3] = [
    ["A1", "A2", "A3", "A4"],
    ["A5", "A6", "A7", "A8"],
    ["A9", "A10", "A11", "A12"],
];

pub const TOP_QUESTIONS: [&str; 2] = ["A13", "A15"];
pub const BOTTOM_QUESTIONS: [&str; 2] = ["A14", "A16"];

pub const HARD_LIMITS_QUESTION: &str = "C1";
pub const NOTES_QUESTION: &str = "C2";

pub const ANATOMY_SELF_QUESTION: &str = "D1";
pub const ANATOMY_PREFERENCE_QUESTION: &str = "D2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnatomyPart {
    Penis,
    Vagina,
    Breasts,
}

impl AnatomyPart {
    pub const ALL: [AnatomyPart; 3] = [
        AnatomyPart::Penis,
        AnatomyPart::Vagina,
        AnatomyPart::Breasts,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "penis" => Some(AnatomyPart::Penis),
            "vagina" => Some(AnatomyPart::Vagina),
            "breasts" => Some(AnatomyPart::Breasts),
            _ => None,
        }
    }
}

/// `any` and `all` in a partner preference stand for every part.
pub fn is_any_anatomy(token: &str) -> bool {
    matches!(token.trim().to_ascii_lowercase().as_str(), "any" | "all")
}
