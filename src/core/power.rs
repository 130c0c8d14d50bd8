//! Power-Role Classifier.
//!
//! Decision table, evaluated in order:
//! 1. both raw scores below the floor → Undefined, confidence = max / 100
//! 2. both at or above the floor and within the dual band → Switch, confidence = min / 100
//! 3. top > bottom → Top, confidence = top × (1 − penalty × bottom)
//! 4. otherwise → Bottom, confidence = bottom × (1 − penalty × top)
//!
//! The Switch test has to run before the greater-than comparison or near ties
//! come out one-sided. Confidence for a one-sided role is reduced by the
//! opposing score on purpose: a strong Top who also wants to submit is a less
//! certain Top.

use crate::config::scoring::PowerThresholds;
use crate::core::normalize::{agreement_answer, IssueSink};
use crate::domain::model::{ConfidenceBand, PowerProfile, PowerRole, SurveyAnswers};
use crate::domain::schema::{BOTTOM_QUESTIONS, TOP_QUESTIONS};
use crate::utils::numeric::{mean, round_to};

pub fn confidence_band(confidence: f64) -> ConfidenceBand {
    if confidence <= 0.30 {
        ConfidenceBand::Low
    } else if confidence <= 0.60 {
        ConfidenceBand::Moderate
    } else if confidence <= 0.85 {
        ConfidenceBand::High
    } else {
        ConfidenceBand::VeryHigh
    }
}

/// Classifies raw scores in [0, 100]. Scores are stored rounded after
/// classification.
pub fn classify_power(top: f64, bottom: f64, thresholds: &PowerThresholds) -> PowerProfile {
    let top = top.clamp(0.0, 100.0);
    let bottom = bottom.clamp(0.0, 100.0);

    let (role, confidence) = if top < thresholds.floor && bottom < thresholds.floor {
        (PowerRole::Undefined, top.max(bottom) / 100.0)
    } else if top >= thresholds.floor
        && bottom >= thresholds.floor
        && (top - bottom).abs() <= thresholds.dual_band
    {
        (PowerRole::Switch, top.min(bottom) / 100.0)
    } else if top > bottom {
        (
            PowerRole::Top,
            (top / 100.0) * (1.0 - thresholds.opposing_penalty * (bottom / 100.0)),
        )
    } else {
        (
            PowerRole::Bottom,
            (bottom / 100.0) * (1.0 - thresholds.opposing_penalty * (top / 100.0)),
        )
    };

    let confidence = confidence.clamp(0.0, 1.0);
    PowerProfile {
        role,
        top_score: top.round(),
        bottom_score: bottom.round(),
        confidence: round_to(confidence, 2),
        confidence_band: confidence_band(confidence),
    }
}

pub fn power_from_answers(
    answers: &SurveyAnswers,
    thresholds: &PowerThresholds,
    sink: &mut IssueSink,
) -> PowerProfile {
    let mut raw = |questions: &[&str]| {
        let signals: Vec<f64> = questions
            .iter()
            .map(|q| agreement_answer(answers, q, sink))
            .collect();
        mean(&signals) * 100.0
    };
    let top = raw(&TOP_QUESTIONS);
    let bottom = raw(&BOTTOM_QUESTIONS);
    classify_power(top, bottom, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scoring::ProfileConfig;

    fn thresholds() -> PowerThresholds {
        ProfileConfig::default().power
    }

    #[test]
    fn test_undefined_below_floor() {
        let p = classify_power(20.0, 29.0, &thresholds());
        assert_eq!(p.role, PowerRole::Undefined);
        assert_eq!(p.confidence, 0.29);
        assert_eq!(p.confidence_band, ConfidenceBand::Low);
    }

    #[test]
    fn test_switch_checked_before_comparison() {
        let p = classify_power(80.0, 66.0, &thresholds());
        assert_eq!(p.role, PowerRole::Switch);
        assert_eq!(p.confidence, 0.66);

        let edge = classify_power(45.0, 30.0, &thresholds());
        assert_eq!(edge.role, PowerRole::Switch);
    }

    #[test]
    fn test_one_sided_confidence_penalized_by_opposing_score() {
        let p = classify_power(100.0, 0.0, &thresholds());
        assert_eq!(p.role, PowerRole::Top);
        assert_eq!(p.confidence, 1.0);
        assert_eq!(p.confidence_band, ConfidenceBand::VeryHigh);

        let p = classify_power(20.0, 90.0, &thresholds());
        assert_eq!(p.role, PowerRole::Bottom);
        // 0.9 × (1 − 0.3 × 0.2) = 0.846
        assert_eq!(p.confidence, 0.85);
        assert_eq!(p.confidence_band, ConfidenceBand::High);
    }

    #[test]
    fn test_one_above_floor_other_below() {
        let p = classify_power(10.0, 35.0, &thresholds());
        assert_eq!(p.role, PowerRole::Bottom);
        let p = classify_power(35.0, 10.0, &thresholds());
        assert_eq!(p.role, PowerRole::Top);
    }

    #[test]
    fn test_classification_is_total() {
        let t = thresholds();
        for top in 0..=100 {
            for bottom in 0..=100 {
                let (top, bottom) = (top as f64, bottom as f64);
                let undefined = top < t.floor && bottom < t.floor;
                let switch =
                    top >= t.floor && bottom >= t.floor && (top - bottom).abs() <= t.dual_band;
                assert!(!(undefined && switch));

                let p = classify_power(top, bottom, &t);
                assert!((0.0..=1.0).contains(&p.confidence));
                let expected = if undefined {
                    PowerRole::Undefined
                } else if switch {
                    PowerRole::Switch
                } else if top > bottom {
                    PowerRole::Top
                } else {
                    PowerRole::Bottom
                };
                assert_eq!(p.role, expected);
            }
        }
    }
}
