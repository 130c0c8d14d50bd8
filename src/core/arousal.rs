use crate::core::normalize::{agreement_answer, IssueSink};
use crate::domain::model::{ArousalBand, ArousalFactor, ArousalProfile, SurveyAnswers};
use crate::domain::schema::AROUSAL_QUESTIONS;
use crate::utils::numeric::{mean, round_to};

pub fn arousal_band(score: f64) -> ArousalBand {
    if score <= 0.30 {
        ArousalBand::Low
    } else if score <= 0.55 {
        ArousalBand::ModerateLow
    } else if score <= 0.75 {
        ArousalBand::ModerateHigh
    } else {
        ArousalBand::High
    }
}

/// Banded on the unrounded mean, stored with two decimals.
pub fn factor(signals: &[f64]) -> ArousalFactor {
    let score = mean(signals).clamp(0.0, 1.0);
    ArousalFactor {
        score: round_to(score, 2),
        band: arousal_band(score),
    }
}

pub fn classify_arousal(answers: &SurveyAnswers, sink: &mut IssueSink) -> ArousalProfile {
    let [excitation, performance, consequence] = AROUSAL_QUESTIONS.map(|group| {
        let signals: Vec<f64> = group
            .iter()
            .map(|q| agreement_answer(answers, q, sink))
            .collect();
        factor(&signals)
    });

    ArousalProfile {
        excitation,
        inhibition_performance: performance,
        inhibition_consequence: consequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawAnswer;

    #[test]
    fn test_band_cut_points() {
        assert_eq!(arousal_band(0.0), ArousalBand::Low);
        assert_eq!(arousal_band(0.30), ArousalBand::Low);
        assert_eq!(arousal_band(0.31), ArousalBand::ModerateLow);
        assert_eq!(arousal_band(0.55), ArousalBand::ModerateLow);
        assert_eq!(arousal_band(0.75), ArousalBand::ModerateHigh);
        assert_eq!(arousal_band(0.76), ArousalBand::High);
    }

    #[test]
    fn test_classify_arousal_groups() {
        let mut answers = SurveyAnswers::new();
        for q in ["A1", "A2", "A3", "A4"] {
            answers.insert(q.to_string(), RawAnswer::Number(7.0));
        }
        for q in ["A5", "A6", "A7", "A8"] {
            answers.insert(q.to_string(), RawAnswer::Number(4.0));
        }
        for q in ["A9", "A10", "A11", "A12"] {
            answers.insert(q.to_string(), RawAnswer::Number(1.0));
        }
        let mut sink = IssueSink::new();

        let arousal = classify_arousal(&answers, &mut sink);

        assert_eq!(arousal.excitation.score, 1.0);
        assert_eq!(arousal.excitation.band, ArousalBand::High);
        assert_eq!(arousal.inhibition_performance.score, 0.5);
        assert_eq!(arousal.inhibition_performance.band, ArousalBand::ModerateLow);
        assert_eq!(arousal.inhibition_consequence.band, ArousalBand::Low);
        assert!(sink.into_issues().is_empty());
    }

    #[test]
    fn test_band_uses_unrounded_score() {
        // 0.5525 rounds to 0.55 but is above the cut point
        let f = factor(&[0.5525]);
        assert_eq!(f.score, 0.55);
        assert_eq!(f.band, ArousalBand::ModerateHigh);
    }
}
