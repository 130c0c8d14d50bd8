//! Activity overlap.
//!
//! The matching strategy is picked once per pair from the role labels:
//!
//! - complementary pair (Top with Bottom): asymmetric directional Jaccard,
//!   the Top's giving matched against the Bottom's receiving as the primary
//!   axis and the reverse as the secondary axis
//! - same-pole pair (Top with Top, Bottom with Bottom): inverse Jaccard, only
//!   versatility earns credit
//! - any other pair: plain symmetric Jaccard
//!
//! Which profile is the Top comes from the role lookup, never from argument
//! order, so swapping the arguments gives the same score.

use crate::config::scoring::ActivitySettings;
use crate::core::compatibility::PairKind;
use crate::domain::model::Profile;
use crate::domain::schema::{ActivityCategory, Direction};
use tracing::debug;

/// Running numerator and denominator of a weighted Jaccard.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    matched: f64,
    potential: f64,
}

impl Tally {
    fn ratio(&self) -> f64 {
        if self.potential <= 0.0 {
            return 0.0;
        }
        (self.matched / self.potential).clamp(0.0, 1.0)
    }
}

fn value(profile: &Profile, category: ActivityCategory, key: &str) -> f64 {
    profile.activity(category, key).unwrap_or(0.0)
}

/// Both ≥ threshold over at least one ≥ threshold, across every item of the
/// category. Empty union scores 0.
pub fn standard_jaccard(a: &Profile, b: &Profile, category: ActivityCategory, threshold: f64) -> f64 {
    let mut tally = Tally::default();
    for item in category.items() {
        let x = value(a, category, item.key) >= threshold;
        let y = value(b, category, item.key) >= threshold;
        if x || y {
            tally.potential += 1.0;
        }
        if x && y {
            tally.matched += 1.0;
        }
    }
    tally.ratio()
}

pub fn asymmetric_jaccard(
    top: &Profile,
    bottom: &Profile,
    category: ActivityCategory,
    settings: &ActivitySettings,
) -> f64 {
    let t = settings.interest_threshold;
    let mut tally = Tally::default();

    for pair in category.directional_pairs() {
        // 主軸: Top 給予 ↔ Bottom 接受
        let top_gives = value(top, category, pair.give) >= t;
        let bottom_receives = value(bottom, category, pair.receive) >= t;
        if top_gives || bottom_receives {
            tally.potential += settings.primary_axis_weight;
        }
        if top_gives && bottom_receives {
            tally.matched += settings.primary_axis_weight;
        }

        // 次軸: Bottom 給予 ↔ Top 接受
        let bottom_gives = value(bottom, category, pair.give) >= t;
        let top_receives = value(top, category, pair.receive) >= t;
        if bottom_gives || top_receives {
            tally.potential += settings.secondary_axis_weight;
        }
        if bottom_gives && top_receives {
            tally.matched += settings.secondary_axis_weight;
        } else if bottom_gives {
            tally.matched += settings.secondary_axis_weight * settings.secondary_partial_credit;
        }
    }

    for item in category.neutral_items() {
        let x = value(top, category, item.key) >= t;
        let y = value(bottom, category, item.key) >= t;
        if x || y {
            tally.potential += 1.0;
        }
        if x && y {
            tally.matched += 1.0;
        }
    }

    tally.ratio()
}

/// Two Tops (or two Bottoms) only match where both want to give and at
/// least one of them is also willing to receive. Every directional pair with
/// any interest counts toward the potential, receive-only pairs included.
pub fn same_pole_jaccard(
    a: &Profile,
    b: &Profile,
    category: ActivityCategory,
    settings: &ActivitySettings,
) -> f64 {
    let t = settings.interest_threshold;
    let mut tally = Tally::default();

    for pair in category.directional_pairs() {
        let a_gives = value(a, category, pair.give) >= t;
        let a_receives = value(a, category, pair.receive) >= t;
        let b_gives = value(b, category, pair.give) >= t;
        let b_receives = value(b, category, pair.receive) >= t;

        if !(a_gives || a_receives || b_gives || b_receives) {
            continue;
        }
        tally.potential += 1.0;

        // 兩人都只想給, 或只有一方想給: 不相容
        if !(a_gives && b_gives) {
            continue;
        }
        tally.matched += match (a_receives, b_receives) {
            (true, true) => settings.same_pole_both_versatile,
            (true, false) | (false, true) => settings.same_pole_one_versatile,
            (false, false) => 0.0,
        };
    }

    for item in category.neutral_items() {
        let x = value(a, category, item.key) >= t;
        let y = value(b, category, item.key) >= t;
        if x || y {
            tally.potential += 1.0;
        }
        if x && y {
            tally.matched += settings.same_pole_non_directional;
        }
    }

    tally.ratio()
}

pub fn category_overlap(
    a: &Profile,
    b: &Profile,
    category: ActivityCategory,
    pair: PairKind,
    settings: &ActivitySettings,
) -> f64 {
    if !category.has_directional_items() {
        return standard_jaccard(a, b, category, settings.interest_threshold);
    }
    match pair {
        PairKind::Complementary => {
            let (top, bottom) = PairKind::top_first(a, b);
            asymmetric_jaccard(top, bottom, category, settings)
        }
        PairKind::SamePole => same_pole_jaccard(a, b, category, settings),
        PairKind::Other => standard_jaccard(a, b, category, settings.interest_threshold),
    }
}

/// Unweighted mean over every schema category, in [0, 1].
pub fn activity_overlap(a: &Profile, b: &Profile, pair: PairKind, settings: &ActivitySettings) -> f64 {
    let scores: Vec<f64> = ActivityCategory::ALL
        .iter()
        .map(|category| {
            let score = category_overlap(a, b, *category, pair, settings);
            debug!("Activity overlap {} ({:?}): {:.3}", category, pair, score);
            score
        })
        .collect();
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scoring::ScoringConfig;
    use crate::core::profile::derive_profile;
    use crate::domain::model::{PowerRole, RawAnswer, SurveyAnswers};

    fn profile_with(role: PowerRole, answers: &[(&str, &str)]) -> Profile {
        let answers: SurveyAnswers = answers
            .iter()
            .map(|(q, a)| (q.to_string(), RawAnswer::Text(a.to_string())))
            .collect();
        let mut profile = derive_profile("test", &answers).profile;
        profile.power.role = role;
        profile
    }

    fn settings() -> ActivitySettings {
        ScoringConfig::default().activity
    }

    #[test]
    fn test_perfect_complementary_pair() {
        // Top 想給, Bottom 想接受
        let top = profile_with(PowerRole::Top, &[("B15b", "Y"), ("B16b", "Y")]);
        let bottom = profile_with(PowerRole::Bottom, &[("B15a", "Y"), ("B16a", "Y")]);

        let score = asymmetric_jaccard(&top, &bottom, ActivityCategory::PowerExchange, &settings());
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_secondary_partial_credit() {
        // 主軸命中, Bottom 也願意給但 Top 不想接受
        let top = profile_with(PowerRole::Top, &[("B15b", "Y")]);
        let bottom = profile_with(PowerRole::Bottom, &[("B15a", "Y"), ("B15b", "M")]);

        let score = asymmetric_jaccard(&top, &bottom, ActivityCategory::PowerExchange, &settings());
        // (0.8 + 0.2 × 0.5) / (0.8 + 0.2)
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_items_are_plain_matches() {
        let top = profile_with(PowerRole::Top, &[("B19", "Y"), ("B20", "M")]);
        let bottom = profile_with(PowerRole::Bottom, &[("B19", "Y"), ("B21", "Y")]);

        let score = asymmetric_jaccard(&top, &bottom, ActivityCategory::VerbalRoleplay, &settings());
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_pole_both_givers_score_zero() {
        let a = profile_with(PowerRole::Top, &[("B15b", "Y"), ("B16b", "Y")]);
        let b = profile_with(PowerRole::Top, &[("B15b", "Y"), ("B16b", "Y")]);

        let score = same_pole_jaccard(&a, &b, ActivityCategory::PowerExchange, &settings());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_same_pole_giver_against_receiver_scores_zero() {
        // 一方只給, 另一方只接受: 雙方都沒有彈性
        let a = profile_with(PowerRole::Top, &[("B15b", "Y")]);
        let b = profile_with(PowerRole::Top, &[("B15a", "Y")]);

        let score = same_pole_jaccard(&a, &b, ActivityCategory::PowerExchange, &settings());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_same_pole_receivers_score_zero() {
        let a = profile_with(
            PowerRole::Bottom,
            &[("B15a", "Y"), ("B16a", "Y"), ("B16b", "Y")],
        );
        let b = profile_with(PowerRole::Bottom, &[("B15a", "Y"), ("B16a", "Y")]);

        let score = same_pole_jaccard(&a, &b, ActivityCategory::PowerExchange, &settings());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_same_pole_versatility_credit() {
        let s = settings();
        // 兩人都想給, 只有 b 也願意接受
        let a = profile_with(PowerRole::Top, &[("B15b", "Y")]);
        let b = profile_with(PowerRole::Top, &[("B15b", "Y"), ("B15a", "M")]);
        let one = same_pole_jaccard(&a, &b, ActivityCategory::PowerExchange, &s);
        assert!((one - s.same_pole_one_versatile).abs() < 1e-9);

        let a = profile_with(PowerRole::Top, &[("B15b", "Y"), ("B15a", "Y")]);
        let both = same_pole_jaccard(&a, &b, ActivityCategory::PowerExchange, &s);
        assert!((both - s.same_pole_both_versatile).abs() < 1e-9);
        assert!(one < both && both < 1.0);
    }

    #[test]
    fn test_standard_jaccard_empty_union() {
        let a = profile_with(PowerRole::Switch, &[]);
        let b = profile_with(PowerRole::Undefined, &[]);
        assert_eq!(standard_jaccard(&a, &b, ActivityCategory::Oral, 0.5), 0.0);
    }

    #[test]
    fn test_overlap_ignores_argument_order() {
        let top = profile_with(PowerRole::Top, &[("B4b", "Y"), ("B1a", "M"), ("B11a", "Y")]);
        let bottom = profile_with(PowerRole::Bottom, &[("B4a", "Y"), ("B1b", "Y"), ("B11b", "M")]);
        let s = settings();

        let ab = activity_overlap(&top, &bottom, PairKind::Complementary, &s);
        let ba = activity_overlap(&bottom, &top, PairKind::Complementary, &s);
        assert_eq!(ab, ba);
        assert!(ab > 0.0);
    }
}
